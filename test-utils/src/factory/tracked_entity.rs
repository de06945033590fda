//! Tracked entity factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tracked entity row for the given kind and name.
pub async fn create_tracked_entity(
    db: &DatabaseConnection,
    kind: &str,
    name: &str,
) -> Result<entity::tracked_entity::Model, DbErr> {
    entity::tracked_entity::ActiveModel {
        id: ActiveValue::NotSet,
        kind: ActiveValue::Set(kind.to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
