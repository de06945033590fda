use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::page_session::{PageSession, UpsertPageSessionParam};

pub struct PageSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, message_id: &str) -> Result<Option<PageSession>, DbErr> {
        let row = entity::prelude::PageSession::find_by_id(message_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.and_then(PageSession::from_entity))
    }

    /// Stores or moves the page position of a paginated message.
    pub async fn upsert(&self, param: UpsertPageSessionParam) -> Result<PageSession, DbErr> {
        let active = entity::page_session::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.clone()),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            entity_name: ActiveValue::Set(param.entity_name),
            page: ActiveValue::Set(param.page),
            created_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::PageSession::insert(active)
            .on_conflict(
                OnConflict::column(entity::page_session::Column::MessageId)
                    .update_columns([
                        entity::page_session::Column::Kind,
                        entity::page_session::Column::EntityName,
                        entity::page_session::Column::Page,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.get(&param.message_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("page session missing after upsert".to_string()))
    }

    /// Sweeps sessions older than the cutoff. Navigation on a swept message
    /// simply stops responding, which is the intended lifetime.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PageSession::delete_many()
            .filter(entity::page_session::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
