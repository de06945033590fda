//! Support ticket operations.
//!
//! The menu message in the tickets channel is maintained through the same
//! reconcile path as the boards, keyed as `tickets:menu`; opening a ticket
//! creates a dedicated channel and a ticket record, and the claim/close
//! buttons drive the status transitions.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelType, CreateChannel, GuildId};
use serenity::http::Http;
use std::sync::Arc;
use tracing::info;

use crate::data::ticket::TicketRepository;
use crate::error::AppError;
use crate::model::ticket::{Ticket, TicketStatus};
use crate::presenter::ticket::{render_ticket_intro, render_ticket_menu};
use crate::presenter::to_create_message;
use crate::reconcile::{chat::ChatPort, EntityLocks, ReconcileAction, Reconciler};

/// Rendered-record key for the ticket menu message.
pub const TICKET_MENU_KEY: &str = "tickets:menu";

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Creates or repairs the single ticket menu message in the given
    /// channel. Reuses the reconciler, so a menu deleted by an admin is
    /// recreated and an intact one is left alone.
    pub async fn ensure_menu(
        &self,
        chat: &dyn ChatPort,
        locks: &EntityLocks,
        channel_id: u64,
    ) -> Result<ReconcileAction, AppError> {
        let menu = render_ticket_menu();

        Reconciler::new(self.db, chat, locks)
            .reconcile(TICKET_MENU_KEY, channel_id, Some(&menu))
            .await
    }

    /// Opens a ticket for a user: one record, one fresh channel, one intro
    /// message with the claim/close buttons.
    ///
    /// # Returns
    /// - `Ok((Ticket, channel_id))` - The created ticket and its channel
    /// - `Err(AppError::BadRequest)` - The user already has an open ticket
    pub async fn open(&self, guild_id: u64, user_id: u64) -> Result<(Ticket, u64), AppError> {
        let repo = TicketRepository::new(self.db);

        if let Some(existing) = repo.find_open_by_user(&user_id.to_string()).await? {
            return Err(AppError::BadRequest(format!(
                "You already have an open ticket (#{}).",
                existing.id
            )));
        }

        let ticket = repo.create(&user_id.to_string()).await?;

        let channel = GuildId::new(guild_id)
            .create_channel(
                &self.http,
                CreateChannel::new(format!("ticket-{}", ticket.id)).kind(ChannelType::Text),
            )
            .await?;

        repo.set_channel(ticket.id, &channel.id.to_string()).await?;

        channel
            .id
            .send_message(&self.http, to_create_message(&render_ticket_intro(&ticket)))
            .await?;

        info!("opened ticket #{} for user {}", ticket.id, user_id);
        Ok((ticket, channel.id.get()))
    }

    /// Marks the ticket belonging to a channel as claimed.
    pub async fn claim(&self, channel_id: u64) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);
        let ticket = self.ticket_for_channel(&repo, channel_id).await?;

        if ticket.status != TicketStatus::Open {
            return Err(AppError::BadRequest(format!(
                "Ticket #{} is {} and cannot be claimed.",
                ticket.id,
                ticket.status.as_str()
            )));
        }

        repo.set_status(ticket.id, TicketStatus::Claimed).await?;
        Ok(Ticket {
            status: TicketStatus::Claimed,
            ..ticket
        })
    }

    /// Closes the ticket belonging to a channel.
    pub async fn close(&self, channel_id: u64) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);
        let ticket = self.ticket_for_channel(&repo, channel_id).await?;

        if ticket.status == TicketStatus::Closed {
            return Err(AppError::BadRequest(format!(
                "Ticket #{} is already closed.",
                ticket.id
            )));
        }

        repo.set_status(ticket.id, TicketStatus::Closed).await?;
        Ok(Ticket {
            status: TicketStatus::Closed,
            ..ticket
        })
    }

    async fn ticket_for_channel(
        &self,
        repo: &TicketRepository<'_>,
        channel_id: u64,
    ) -> Result<Ticket, AppError> {
        repo.find_by_channel(&channel_id.to_string())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No ticket is associated with this channel.".to_string())
            })
    }
}
