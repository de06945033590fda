//! Per-kind board synchronization.
//!
//! Runs the poll → render → reconcile path for every tracked entity of a
//! feature kind. Shared by the scheduler ticks and the manual `/refresh`
//! command; only the reporting differs (logs vs. an ephemeral reply).

use sea_orm::DatabaseConnection;
use tracing::{debug, error};

use crate::data::{event_channel::EventChannelRepository, tracked_entity::TrackedEntityRepository};
use crate::error::{fetch::FetchError, AppError};
use crate::fetch::FetcherSet;
use crate::model::tracked_entity::{FeatureKind, TrackedEntity};
use crate::presenter;
use crate::reconcile::{chat::ChatPort, EntityLocks, ReconcileAction, Reconciler};
use crate::util::parse::parse_u64_from_string;

pub struct EntitySyncService<'a> {
    db: &'a DatabaseConnection,
    chat: &'a dyn ChatPort,
    locks: &'a EntityLocks,
    fetchers: &'a FetcherSet,
}

impl<'a> EntitySyncService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        chat: &'a dyn ChatPort,
        locks: &'a EntityLocks,
        fetchers: &'a FetcherSet,
    ) -> Self {
        Self {
            db,
            chat,
            locks,
            fetchers,
        }
    }

    /// Synchronizes every tracked entity of a kind against its configured
    /// channel.
    ///
    /// One entity's failure never aborts its siblings: errors are logged and
    /// the loop continues, so a single flaky upstream cannot starve the
    /// whole tick.
    ///
    /// # Returns
    /// - `Ok(Vec<(name, action)>)` - The action taken per entity that
    ///   reconciled successfully
    /// - `Err(AppError)` - Channel mapping unreadable or unparseable
    pub async fn sync_kind(
        &self,
        kind: FeatureKind,
    ) -> Result<Vec<(String, ReconcileAction)>, AppError> {
        let channel = EventChannelRepository::new(self.db).get(kind.as_str()).await?;
        let Some(channel) = channel else {
            debug!("no channel configured for {}, skipping", kind);
            return Ok(Vec::new());
        };
        let channel_id = parse_u64_from_string(&channel.channel_id)?;

        let entities = TrackedEntityRepository::new(self.db).get_by_kind(kind).await?;

        let mut results = Vec::with_capacity(entities.len());
        for entity in entities {
            match self.sync_entity(&entity, channel_id).await {
                Ok(action) => results.push((entity.name, action)),
                Err(e) => error!("sync failed for {} {}: {}", kind, entity.name, e),
            }
        }

        Ok(results)
    }

    /// Polls one entity and reconciles its board message.
    ///
    /// Transient fetch errors bubble up (the next tick retries); permanent
    /// ones mean the entity is gone upstream and reconcile runs with absent
    /// state so the board is taken down.
    pub async fn sync_entity(
        &self,
        entity: &TrackedEntity,
        channel_id: u64,
    ) -> Result<ReconcileAction, AppError> {
        let observed = match self.fetchers.for_kind(entity.kind).poll(entity).await {
            Ok(snapshot) => snapshot,
            Err(FetchError::Permanent { status }) => {
                debug!(
                    "{} {} gone upstream (status {}), reconciling as absent",
                    entity.kind, entity.name, status
                );
                None
            }
            Err(err) => return Err(err.into()),
        };

        let payload = observed.map(|snapshot| presenter::render(&snapshot, 0));

        Reconciler::new(self.db, self.chat, self.locks)
            .reconcile(&entity.record_key(), channel_id, payload.as_ref())
            .await
    }
}
