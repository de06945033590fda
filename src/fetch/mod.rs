//! Pollers for every feature kind behind one `Fetcher` capability trait.
//!
//! The original implementation scattered duck-typed "fetch current X"
//! functions across features; unifying them lets the scheduler and the
//! reconciler be written once and parameterized by kind.

pub mod coc;
pub mod twitch;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::data::clan_games::ClanGamesRepository;
use crate::error::fetch::FetchError;
use crate::fetch::{coc::CocClient, twitch::TwitchClient};
use crate::model::snapshot::{ClanGamesPlayer, ClanGamesSnapshot, Snapshot};
use crate::model::tracked_entity::{FeatureKind, TrackedEntity};

/// A poll of one tracked entity's current external state.
///
/// `Ok(None)` means the entity exists but has nothing to display right now
/// (clan not in war, stream offline, no clan games period running).
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn poll(&self, entity: &TrackedEntity) -> Result<Option<Snapshot>, FetchError>;
}

/// Regular clan wars; league rounds are left to `WarLeagueFetcher`.
pub struct WarFetcher {
    coc: Arc<CocClient>,
}

#[async_trait]
impl Fetcher for WarFetcher {
    async fn poll(&self, entity: &TrackedEntity) -> Result<Option<Snapshot>, FetchError> {
        let war = self.coc.current_war(&entity.name).await?;
        Ok(war.filter(|w| !w.league).map(Snapshot::War))
    }
}

/// Clan war league rounds only.
pub struct WarLeagueFetcher {
    coc: Arc<CocClient>,
}

#[async_trait]
impl Fetcher for WarLeagueFetcher {
    async fn poll(&self, entity: &TrackedEntity) -> Result<Option<Snapshot>, FetchError> {
        let war = self.coc.current_war(&entity.name).await?;
        Ok(war.filter(|w| w.league).map(Snapshot::War))
    }
}

/// Clan games state lives in the local store (maintained by admin commands),
/// so this poll reads the database instead of an external API.
pub struct ClanGamesFetcher {
    db: DatabaseConnection,
}

#[async_trait]
impl Fetcher for ClanGamesFetcher {
    async fn poll(&self, _entity: &TrackedEntity) -> Result<Option<Snapshot>, FetchError> {
        let repo = ClanGamesRepository::new(&self.db);

        let period = repo.current_period().await.map_err(store_read_failed)?;
        let Some(period) = period else {
            return Ok(None);
        };

        // The board disappears once the event window has closed.
        if Utc::now() > period.end_time {
            return Ok(None);
        }

        let entries = repo.entries(period.id).await.map_err(store_read_failed)?;
        let total_points = entries.iter().map(|e| e.points).sum();

        Ok(Some(Snapshot::ClanGames(ClanGamesSnapshot {
            start_time: period.start_time,
            end_time: period.end_time,
            target_points: period.target_points,
            total_points,
            players: entries
                .into_iter()
                .map(|e| ClanGamesPlayer {
                    name: e.player_name,
                    points: e.points,
                })
                .collect(),
        })))
    }
}

fn store_read_failed(err: sea_orm::DbErr) -> FetchError {
    error!("clan games store read failed: {}", err);
    FetchError::Transient { status: None }
}

/// Twitch live status.
pub struct StreamFetcher {
    twitch: Arc<TwitchClient>,
}

#[async_trait]
impl Fetcher for StreamFetcher {
    async fn poll(&self, entity: &TrackedEntity) -> Result<Option<Snapshot>, FetchError> {
        let live = self.twitch.stream_by_login(&entity.name).await?;
        Ok(live.map(Snapshot::Stream))
    }
}

/// One fetcher per feature kind, resolved by the sync service and the
/// pagination handler.
pub struct FetcherSet {
    war: WarFetcher,
    war_league: WarLeagueFetcher,
    clan_games: ClanGamesFetcher,
    stream: StreamFetcher,
}

impl FetcherSet {
    pub fn new(db: DatabaseConnection, coc: Arc<CocClient>, twitch: Arc<TwitchClient>) -> Self {
        Self {
            war: WarFetcher { coc: coc.clone() },
            war_league: WarLeagueFetcher { coc },
            clan_games: ClanGamesFetcher { db },
            stream: StreamFetcher { twitch },
        }
    }

    pub fn for_kind(&self, kind: FeatureKind) -> &dyn Fetcher {
        match kind {
            FeatureKind::War => &self.war,
            FeatureKind::WarLeague => &self.war_league,
            FeatureKind::ClanGames => &self.clan_games,
            FeatureKind::Stream => &self.stream,
        }
    }
}
