//! Clan games factories.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a clan games period that started an hour ago and ends at
/// `end_time`.
pub async fn create_period(
    db: &DatabaseConnection,
    end_time: DateTime<Utc>,
    target_points: i32,
) -> Result<entity::clan_games_period::Model, DbErr> {
    entity::clan_games_period::ActiveModel {
        id: ActiveValue::NotSet,
        start_time: ActiveValue::Set(Utc::now() - Duration::hours(1)),
        end_time: ActiveValue::Set(end_time),
        target_points: ActiveValue::Set(target_points),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a point entry for a player within a period.
pub async fn create_entry(
    db: &DatabaseConnection,
    period_id: i32,
    player_name: &str,
    points: i32,
) -> Result<entity::clan_games_entry::Model, DbErr> {
    entity::clan_games_entry::ActiveModel {
        id: ActiveValue::NotSet,
        period_id: ActiveValue::Set(period_id),
        player_name: ActiveValue::Set(player_name.to_string()),
        points: ActiveValue::Set(points),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
