use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::ticket::{Ticket, TicketStatus};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open ticket for a user. The ticket channel is attached
    /// once it has been created on Discord.
    pub async fn create(&self, user_id: &str) -> Result<Ticket, DbErr> {
        let now = Utc::now();

        let row = entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            channel_id: ActiveValue::Set(None),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(row)
            .ok_or_else(|| DbErr::Custom("ticket status round-trip failed".to_string()))
    }

    pub async fn set_channel(&self, ticket_id: i32, channel_id: &str) -> Result<(), DbErr> {
        let mut active: entity::ticket::ActiveModel = Default::default();
        active.id = ActiveValue::Unchanged(ticket_id);
        active.channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::Ticket::update_many()
            .set(active)
            .filter(entity::ticket::Column::Id.eq(ticket_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_status(&self, ticket_id: i32, status: TicketStatus) -> Result<(), DbErr> {
        let mut active: entity::ticket::ActiveModel = Default::default();
        active.id = ActiveValue::Unchanged(ticket_id);
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::Ticket::update_many()
            .set(active)
            .filter(entity::ticket::Column::Id.eq(ticket_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds a user's ticket that is not yet closed, if any. Enforces the
    /// one-open-ticket-per-user rule at the command layer.
    pub async fn find_open_by_user(&self, user_id: &str) -> Result<Option<Ticket>, DbErr> {
        let row = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::UserId.eq(user_id))
            .filter(entity::ticket::Column::Status.ne(TicketStatus::Closed.as_str()))
            .one(self.db)
            .await?;

        Ok(row.and_then(Ticket::from_entity))
    }

    pub async fn find_by_channel(&self, channel_id: &str) -> Result<Option<Ticket>, DbErr> {
        let row = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(channel_id))
            .one(self.db)
            .await?;

        Ok(row.and_then(Ticket::from_entity))
    }
}
