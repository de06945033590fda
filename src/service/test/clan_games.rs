use super::*;
use chrono::{Duration, Utc};

use crate::data::clan_games::ClanGamesRepository;
use crate::error::AppError;
use crate::service::clan_games::ClanGamesService;

async fn games_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::ClanGamesPeriod)
        .with_table(entity::prelude::ClanGamesEntry)
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn starts_a_period_and_records_points() {
    let test = games_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = ClanGamesService::new(db);

    let period = service.start_period(6, 50_000).await.unwrap();
    assert_eq!(period.target_points, 50_000);

    let entry = service.record_points("Ana", 1200).await.unwrap();
    assert_eq!(entry.points, 1200);

    // Reporting again replaces the entry instead of duplicating it.
    let entry = service.record_points("Ana", 2400).await.unwrap();
    assert_eq!(entry.points, 2400);

    let entries = ClanGamesRepository::new(db).entries(period.id).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn rejects_overlapping_periods() {
    let test = games_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = ClanGamesService::new(db);

    service.start_period(6, 50_000).await.unwrap();

    let err = service.start_period(6, 50_000).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn rejects_points_outside_the_cap() {
    let test = games_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = ClanGamesService::new(db);

    service.start_period(6, 50_000).await.unwrap();

    assert!(matches!(
        service.record_points("Ana", 4001).await.unwrap_err(),
        AppError::BadRequest(_)
    ));
    assert!(matches!(
        service.record_points("Ana", -5).await.unwrap_err(),
        AppError::BadRequest(_)
    ));
}

#[tokio::test]
async fn rejects_points_without_a_running_period() {
    let test = games_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = ClanGamesService::new(db);

    assert!(matches!(
        service.record_points("Ana", 100).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn allows_a_new_period_after_the_previous_ended() {
    let test = games_tables().await;
    let db = test.db.as_ref().unwrap();
    let service = ClanGamesService::new(db);

    // An old period that is already over.
    ClanGamesRepository::new(db)
        .create_period(
            Utc::now() - Duration::days(10),
            Utc::now() - Duration::days(4),
            50_000,
        )
        .await
        .unwrap();

    assert!(service.start_period(6, 50_000).await.is_ok());
}
