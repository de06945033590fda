//! Rendered record factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for rendered record rows with customizable fields.
///
/// Defaults: a unique entity name, channel `42`, a unique message id, and a
/// placeholder hash.
pub struct RenderedRecordFactory<'a> {
    db: &'a DatabaseConnection,
    entity_name: String,
    channel_id: String,
    message_id: String,
    last_hash: String,
}

impl<'a> RenderedRecordFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entity_name: format!("war:#TEST{}", id),
            channel_id: "42".to_string(),
            message_id: format!("{}", 9000 + id),
            last_hash: format!("hash-{}", id),
        }
    }

    pub fn entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = entity_name.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn last_hash(mut self, last_hash: impl Into<String>) -> Self {
        self.last_hash = last_hash.into();
        self
    }

    pub async fn build(self) -> Result<entity::rendered_record::Model, DbErr> {
        let now = Utc::now();

        entity::rendered_record::ActiveModel {
            id: ActiveValue::NotSet,
            entity_name: ActiveValue::Set(self.entity_name),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            last_hash: ActiveValue::Set(self.last_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}
