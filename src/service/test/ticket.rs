use super::*;
use serenity::http::Http;

use crate::data::ticket::TicketRepository;
use crate::error::AppError;
use crate::model::ticket::TicketStatus;
use crate::service::ticket::{TicketService, TICKET_MENU_KEY};

async fn ticket_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Ticket)
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap()
}

fn offline_http() -> std::sync::Arc<Http> {
    std::sync::Arc::new(Http::new("unused-token"))
}

/// The menu is created once and repaired when an admin deletes it by hand.
#[tokio::test]
async fn menu_is_created_once_and_repaired_after_deletion() {
    let test = ticket_tables().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let service = TicketService::new(db, offline_http());

    let action = service.ensure_menu(&chat, &locks, 77).await.unwrap();
    assert_eq!(action, ReconcileAction::Created);

    let action = service.ensure_menu(&chat, &locks, 77).await.unwrap();
    assert_eq!(action, ReconcileAction::Unchanged);
    assert_eq!(chat.sends(), 1);

    let record = crate::data::rendered_record::RenderedRecordRepository::new(db)
        .get_by_entity_name(TICKET_MENU_KEY)
        .await
        .unwrap()
        .unwrap();
    chat.remove_externally(77, record.message_id.parse().unwrap());

    let action = service.ensure_menu(&chat, &locks, 77).await.unwrap();
    assert_eq!(action, ReconcileAction::Created);
    assert_eq!(chat.message_count(), 1);
}

/// Claim and close walk the status transitions; wrong transitions are
/// rejected with a human-readable message.
#[tokio::test]
async fn claim_and_close_transition_ticket_status() {
    let test = ticket_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = TicketService::new(db, offline_http());
    let repo = TicketRepository::new(db);

    let ticket = repo.create("555").await.unwrap();
    repo.set_channel(ticket.id, "9000").await.unwrap();

    let claimed = service.claim(9000).await.unwrap();
    assert_eq!(claimed.status, TicketStatus::Claimed);

    // A claimed ticket cannot be claimed again.
    assert!(matches!(
        service.claim(9000).await.unwrap_err(),
        AppError::BadRequest(_)
    ));

    let closed = service.close(9000).await.unwrap();
    assert_eq!(closed.status, TicketStatus::Closed);

    assert!(matches!(
        service.close(9000).await.unwrap_err(),
        AppError::BadRequest(_)
    ));
}

#[tokio::test]
async fn unknown_channel_is_reported_as_not_found() {
    let test = ticket_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = TicketService::new(db, offline_http());

    assert!(matches!(
        service.claim(1).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}
