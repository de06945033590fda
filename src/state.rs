//! Shared application state.
//!
//! Initialized once in `main` and cloned into the bot handler and the
//! scheduler jobs. All fields are cheap to clone: the database connection is
//! a pool handle and the API clients are reference-counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::fetch::{coc::CocClient, twitch::TwitchClient, FetcherSet};
use crate::reconcile::EntityLocks;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub coc: Arc<CocClient>,
    pub twitch: Arc<TwitchClient>,
    /// Per-entity reconcile locks; shared so scheduled ticks and manual
    /// triggers serialize against each other.
    pub locks: Arc<EntityLocks>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        coc: Arc<CocClient>,
        twitch: Arc<TwitchClient>,
        locks: Arc<EntityLocks>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            coc,
            twitch,
            locks,
            config,
        }
    }

    pub fn fetchers(&self) -> FetcherSet {
        FetcherSet::new(self.db.clone(), self.coc.clone(), self.twitch.clone())
    }
}
