//! Chat platform seam.
//!
//! `ChatPort` is the entire surface the reconciler needs from the chat SDK:
//! send, edit, delete, and existence-check of a single message. The Discord
//! implementation wraps serenity's HTTP client; tests substitute an
//! in-memory mock.

use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::chat::ChatError;
use crate::presenter::{to_create_message, to_edit_message, DisplayPayload};

#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Posts a new message, returning its id.
    async fn send_message(
        &self,
        channel_id: u64,
        payload: &DisplayPayload,
    ) -> Result<u64, ChatError>;

    /// Edits an existing message in place.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        payload: &DisplayPayload,
    ) -> Result<(), ChatError>;

    /// Deletes a message. `NotFound` when it is already gone.
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError>;

    /// Checks that a message still exists. `NotFound` when a human deleted
    /// it out of band.
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError>;
}

/// `ChatPort` backed by the Discord HTTP API.
pub struct DiscordChat {
    http: Arc<Http>,
}

impl DiscordChat {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPort for DiscordChat {
    async fn send_message(
        &self,
        channel_id: u64,
        payload: &DisplayPayload,
    ) -> Result<u64, ChatError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, to_create_message(payload))
            .await
            .map_err(ChatError::from_discord)?;

        Ok(message.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        payload: &DisplayPayload,
    ) -> Result<(), ChatError> {
        self.http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &to_edit_message(payload),
                vec![],
            )
            .await
            .map_err(ChatError::from_discord)?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
            .map_err(ChatError::from_discord)?;

        Ok(())
    }

    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError> {
        self.http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
            .map_err(ChatError::from_discord)?;

        Ok(())
    }
}
