use super::*;
use chrono::{Duration, Utc};

use crate::data::{
    clan_games::ClanGamesRepository, event_channel::EventChannelRepository,
    rendered_record::RenderedRecordRepository, tracked_entity::TrackedEntityRepository,
};
use crate::model::tracked_entity::FeatureKind;
use crate::service::sync::EntitySyncService;

async fn sync_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::TrackedEntity)
        .with_table(entity::prelude::EventChannel)
        .with_table(entity::prelude::RenderedRecord)
        .with_table(entity::prelude::ClanGamesPeriod)
        .with_table(entity::prelude::ClanGamesEntry)
        .build()
        .await
        .unwrap()
}

/// Without a configured channel the tick is a silent skip.
#[tokio::test]
async fn skips_kind_without_channel_mapping() {
    let test = sync_tables().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let fetchers = offline_fetchers(db);

    TrackedEntityRepository::new(db)
        .ensure(FeatureKind::ClanGames, "#AAA")
        .await
        .unwrap();

    let service = EntitySyncService::new(db, &chat, &locks, &fetchers);
    let results = service.sync_kind(FeatureKind::ClanGames).await.unwrap();

    assert!(results.is_empty());
    assert_eq!(chat.sends(), 0);
}

/// Full board lifecycle through the sync service, driven by the store-backed
/// clan games fetcher: create on first observation, no-op while unchanged,
/// edit on change, delete when the window closes.
#[tokio::test]
async fn clan_games_board_lifecycle() {
    let test = sync_tables().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let fetchers = offline_fetchers(db);

    EventChannelRepository::new(db)
        .upsert(FeatureKind::ClanGames.as_str(), "42")
        .await
        .unwrap();
    TrackedEntityRepository::new(db)
        .ensure(FeatureKind::ClanGames, "#AAA")
        .await
        .unwrap();

    let games = ClanGamesRepository::new(db);
    let period = games
        .create_period(Utc::now(), Utc::now() + Duration::days(6), 50_000)
        .await
        .unwrap();
    games.upsert_entry(period.id, "Ana", 1000).await.unwrap();

    let service = EntitySyncService::new(db, &chat, &locks, &fetchers);

    let results = service.sync_kind(FeatureKind::ClanGames).await.unwrap();
    assert_eq!(results, vec![("#AAA".to_string(), ReconcileAction::Created)]);

    let record_repo = RenderedRecordRepository::new(db);
    let record = record_repo
        .get_by_entity_name("clan-games:#AAA")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.channel_id, "42");

    // Nothing changed since the last tick.
    let results = service.sync_kind(FeatureKind::ClanGames).await.unwrap();
    assert_eq!(results[0].1, ReconcileAction::Unchanged);

    // A player reported points; the board is edited in place.
    games.upsert_entry(period.id, "Ana", 2500).await.unwrap();
    let results = service.sync_kind(FeatureKind::ClanGames).await.unwrap();
    assert_eq!(results[0].1, ReconcileAction::Edited);
    assert_eq!(chat.message_count(), 1);

    // The window closes; the board comes down and the record goes away.
    close_current_period(db).await;

    let results = service.sync_kind(FeatureKind::ClanGames).await.unwrap();
    assert_eq!(results[0].1, ReconcileAction::Deleted);
    assert_eq!(chat.message_count(), 0);
    assert!(record_repo
        .get_by_entity_name("clan-games:#AAA")
        .await
        .unwrap()
        .is_none());
}

/// Rewrites every stored period's end time into the past.
async fn close_current_period(db: &sea_orm::DatabaseConnection) {
    use sea_orm::{ActiveValue, EntityTrait};

    let mut active: entity::clan_games_period::ActiveModel = Default::default();
    active.end_time = ActiveValue::Set(Utc::now() - Duration::hours(1));

    entity::prelude::ClanGamesPeriod::update_many()
        .set(active)
        .exec(db)
        .await
        .unwrap();
}
