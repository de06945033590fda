//! Poll-compare-reconcile core.
//!
//! Given the freshly observed state of a tracked entity (or its absence) and
//! the stored rendered record, the reconciler takes exactly one corrective
//! action against the chat platform and updates the store to match. This is
//! the logic the original implementation restated per feature; here it is
//! written once and shared by every board and the manual trigger commands.

pub mod chat;
pub mod hash;

#[cfg(test)]
pub(crate) mod test;

use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use crate::data::rendered_record::RenderedRecordRepository;
use crate::error::{chat::ChatError, AppError};
use crate::model::rendered_record::{RenderedRecord, UpsertRenderedRecordParam};
use crate::presenter::DisplayPayload;
use crate::reconcile::{chat::ChatPort, hash::payload_hash};
use crate::util::parse::parse_u64_from_string;

/// Per-entity async mutexes. Reconciliation for one entity must never run
/// twice concurrently (two overlapping ticks would race two creates), while
/// distinct entities proceed in parallel.
#[derive(Default)]
pub struct EntityLocks {
    inner: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl EntityLocks {
    pub fn acquire(&self, entity_name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        map.entry(entity_name.to_string()).or_default().clone()
    }
}

/// The single action a reconcile call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    Created,
    Edited,
    Unchanged,
    Deleted,
    Noop,
}

impl std::fmt::Display for ReconcileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReconcileAction::Created => "created",
            ReconcileAction::Edited => "edited",
            ReconcileAction::Unchanged => "unchanged",
            ReconcileAction::Deleted => "deleted",
            ReconcileAction::Noop => "no-op",
        };
        f.write_str(label)
    }
}

pub struct Reconciler<'a> {
    db: &'a DatabaseConnection,
    chat: &'a dyn ChatPort,
    locks: &'a EntityLocks,
}

impl<'a> Reconciler<'a> {
    pub fn new(db: &'a DatabaseConnection, chat: &'a dyn ChatPort, locks: &'a EntityLocks) -> Self {
        Self { db, chat, locks }
    }

    /// Reconciles one entity against its observed state.
    ///
    /// Decision table:
    ///
    /// | stored | observed | action |
    /// |---|---|---|
    /// | absent | present | create message, store record |
    /// | present | present, changed | edit in place, update hash |
    /// | present | present, unchanged | verify message exists, no-op |
    /// | present | absent | delete message, remove record |
    /// | absent | absent | no-op |
    ///
    /// A 404 on edit or on the existence check means the message was deleted
    /// out of band; the record is treated as absent and the message is
    /// recreated.
    pub async fn reconcile(
        &self,
        entity_name: &str,
        channel_id: u64,
        observed: Option<&DisplayPayload>,
    ) -> Result<ReconcileAction, AppError> {
        let lock = self.locks.acquire(entity_name);
        let _guard = lock.lock().await;

        let repo = RenderedRecordRepository::new(self.db);
        let stored = repo.get_by_entity_name(entity_name).await?;

        let action = match (stored, observed) {
            (None, Some(payload)) => {
                self.create(&repo, entity_name, channel_id, payload).await?
            }
            (Some(record), Some(payload)) => {
                self.update(&repo, entity_name, channel_id, &record, payload)
                    .await?
            }
            (Some(record), None) => self.remove(&repo, entity_name, &record).await?,
            (None, None) => ReconcileAction::Noop,
        };

        debug!("reconciled {}: {}", entity_name, action);
        Ok(action)
    }

    async fn create(
        &self,
        repo: &RenderedRecordRepository<'_>,
        entity_name: &str,
        channel_id: u64,
        payload: &DisplayPayload,
    ) -> Result<ReconcileAction, AppError> {
        let message_id = self.chat.send_message(channel_id, payload).await?;

        repo.upsert(UpsertRenderedRecordParam {
            entity_name: entity_name.to_string(),
            channel_id: channel_id.to_string(),
            message_id: message_id.to_string(),
            last_hash: payload_hash(payload),
        })
        .await?;

        Ok(ReconcileAction::Created)
    }

    async fn update(
        &self,
        repo: &RenderedRecordRepository<'_>,
        entity_name: &str,
        channel_id: u64,
        record: &RenderedRecord,
        payload: &DisplayPayload,
    ) -> Result<ReconcileAction, AppError> {
        let stored_channel = parse_u64_from_string(&record.channel_id)?;
        let message_id = parse_u64_from_string(&record.message_id)?;

        // The feature was remapped to another channel: drop the old message
        // and start over in the new one.
        if stored_channel != channel_id {
            match self.chat.delete_message(stored_channel, message_id).await {
                Ok(()) | Err(ChatError::NotFound) => {}
                Err(e) => return Err(e.into()),
            }
            return self.create(repo, entity_name, channel_id, payload).await;
        }

        let hash = payload_hash(payload);
        if record.last_hash == hash {
            // Nothing to say, but the message must still exist; a human may
            // have deleted it out of band.
            return match self.chat.fetch_message(channel_id, message_id).await {
                Ok(()) => Ok(ReconcileAction::Unchanged),
                Err(ChatError::NotFound) => {
                    self.create(repo, entity_name, channel_id, payload).await
                }
                Err(e) => Err(e.into()),
            };
        }

        match self.chat.edit_message(channel_id, message_id, payload).await {
            Ok(()) => {
                repo.upsert(UpsertRenderedRecordParam {
                    entity_name: entity_name.to_string(),
                    channel_id: channel_id.to_string(),
                    message_id: record.message_id.clone(),
                    last_hash: hash,
                })
                .await?;
                Ok(ReconcileAction::Edited)
            }
            Err(ChatError::NotFound) => self.create(repo, entity_name, channel_id, payload).await,
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(
        &self,
        repo: &RenderedRecordRepository<'_>,
        entity_name: &str,
        record: &RenderedRecord,
    ) -> Result<ReconcileAction, AppError> {
        let channel_id = parse_u64_from_string(&record.channel_id)?;
        let message_id = parse_u64_from_string(&record.message_id)?;

        match self.chat.delete_message(channel_id, message_id).await {
            Ok(()) | Err(ChatError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        repo.delete_by_entity_name(entity_name).await?;
        Ok(ReconcileAction::Deleted)
    }
}
