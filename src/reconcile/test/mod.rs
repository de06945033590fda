use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use test_utils::builder::TestBuilder;

use crate::data::rendered_record::RenderedRecordRepository;
use crate::error::chat::ChatError;
use crate::presenter::DisplayPayload;
use crate::reconcile::chat::ChatPort;
use crate::reconcile::{EntityLocks, ReconcileAction, Reconciler};

mod lifecycle;

/// In-memory chat platform double. Messages live in a map keyed by
/// (channel, message id); tests can delete them "out of band" to simulate a
/// human removing the bot's message.
pub struct MockChat {
    next_id: AtomicU64,
    messages: Mutex<HashMap<(u64, u64), DisplayPayload>>,
    sends: AtomicU64,
    edits: AtomicU64,
}

impl MockChat {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            messages: Mutex::new(HashMap::new()),
            sends: AtomicU64::new(0),
            edits: AtomicU64::new(0),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn payload_of(&self, channel_id: u64, message_id: u64) -> Option<DisplayPayload> {
        self.messages
            .lock()
            .unwrap()
            .get(&(channel_id, message_id))
            .cloned()
    }

    /// Simulates a human deleting the message directly in Discord.
    pub fn remove_externally(&self, channel_id: u64, message_id: u64) {
        self.messages
            .lock()
            .unwrap()
            .remove(&(channel_id, message_id));
    }

    pub fn sends(&self) -> u64 {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn edits(&self) -> u64 {
        self.edits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatPort for MockChat {
    async fn send_message(
        &self,
        channel_id: u64,
        payload: &DisplayPayload,
    ) -> Result<u64, ChatError> {
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.messages
            .lock()
            .unwrap()
            .insert((channel_id, message_id), payload.clone());
        self.sends.fetch_add(1, Ordering::SeqCst);
        Ok(message_id)
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        payload: &DisplayPayload,
    ) -> Result<(), ChatError> {
        let mut messages = self.messages.lock().unwrap();
        match messages.get_mut(&(channel_id, message_id)) {
            Some(existing) => {
                *existing = payload.clone();
                self.edits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(ChatError::NotFound),
        }
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError> {
        match self
            .messages
            .lock()
            .unwrap()
            .remove(&(channel_id, message_id))
        {
            Some(_) => Ok(()),
            None => Err(ChatError::NotFound),
        }
    }

    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<(), ChatError> {
        if self
            .messages
            .lock()
            .unwrap()
            .contains_key(&(channel_id, message_id))
        {
            Ok(())
        } else {
            Err(ChatError::NotFound)
        }
    }
}

pub async fn record_store() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap()
}

pub fn payload(description: &str) -> DisplayPayload {
    DisplayPayload::new("Alpha ⚔️ Bravo", description, 0xFFD700)
}

pub const CHANNEL: u64 = 42;
