//! Rendered record data repository.
//!
//! Rendered records track the single Discord message currently representing
//! a tracked entity's state. The unique index on `entity_name` enforces the
//! at-most-one-record invariant, and `upsert` rides on it with a single
//! atomic insert-on-conflict-update statement so concurrent upserts for the
//! same entity serialize at the data layer.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::rendered_record::{RenderedRecord, UpsertRenderedRecordParam};

pub struct RenderedRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RenderedRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the rendered record for an entity key.
    ///
    /// # Returns
    /// - `Ok(Some(RenderedRecord))` - A message is currently tracked
    /// - `Ok(None)` - No message exists for this entity
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_entity_name(
        &self,
        entity_name: &str,
    ) -> Result<Option<RenderedRecord>, DbErr> {
        let record = entity::prelude::RenderedRecord::find()
            .filter(entity::rendered_record::Column::EntityName.eq(entity_name))
            .one(self.db)
            .await?;

        Ok(record.map(RenderedRecord::from_entity))
    }

    /// Creates or replaces the rendered record for an entity key.
    ///
    /// Executes one `INSERT ... ON CONFLICT (entity_name) DO UPDATE`
    /// statement, so a crash can never leave a partially written record and
    /// repeated upserts are idempotent.
    ///
    /// # Returns
    /// - `Ok(RenderedRecord)` - The stored record after the upsert
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertRenderedRecordParam) -> Result<RenderedRecord, DbErr> {
        let now = Utc::now();

        let active = entity::rendered_record::ActiveModel {
            id: ActiveValue::NotSet,
            entity_name: ActiveValue::Set(param.entity_name.clone()),
            channel_id: ActiveValue::Set(param.channel_id),
            message_id: ActiveValue::Set(param.message_id),
            last_hash: ActiveValue::Set(param.last_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::RenderedRecord::insert(active)
            .on_conflict(
                OnConflict::column(entity::rendered_record::Column::EntityName)
                    .update_columns([
                        entity::rendered_record::Column::ChannelId,
                        entity::rendered_record::Column::MessageId,
                        entity::rendered_record::Column::LastHash,
                        entity::rendered_record::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.get_by_entity_name(&param.entity_name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("rendered record missing after upsert".to_string()))
    }

    /// Removes the rendered record for an entity key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_entity_name(&self, entity_name: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::RenderedRecord::delete_many()
            .filter(entity::rendered_record::Column::EntityName.eq(entity_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
