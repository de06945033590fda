use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::model::event_channel::EventChannel;

pub struct EventChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configured channel for a feature kind, if any.
    pub async fn get(&self, kind: &str) -> Result<Option<EventChannel>, DbErr> {
        let row = entity::prelude::EventChannel::find_by_id(kind.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(EventChannel::from_entity))
    }

    /// Sets or replaces the channel mapping for a feature kind.
    pub async fn upsert(&self, kind: &str, channel_id: &str) -> Result<EventChannel, DbErr> {
        let active = entity::event_channel::ActiveModel {
            kind: ActiveValue::Set(kind.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::EventChannel::insert(active)
            .on_conflict(
                OnConflict::column(entity::event_channel::Column::Kind)
                    .update_columns([
                        entity::event_channel::Column::ChannelId,
                        entity::event_channel::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.get(kind)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("event channel missing after upsert".to_string()))
    }
}
