use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::builder::TestBuilder;

use crate::fetch::{coc::CocClient, twitch::TwitchClient, FetcherSet};
use crate::reconcile::test::MockChat;
use crate::reconcile::{EntityLocks, ReconcileAction};

mod clan_games;
mod sync;
mod ticket;

/// Fetcher set whose external clients are never polled in these tests; only
/// the store-backed clan games fetcher is exercised.
pub fn offline_fetchers(db: &DatabaseConnection) -> FetcherSet {
    let http = reqwest::Client::new();
    let coc = Arc::new(CocClient::new(http.clone(), "test-token".to_string()));
    let twitch = Arc::new(
        TwitchClient::new(http, "client-id".to_string(), "client-secret".to_string()).unwrap(),
    );

    FetcherSet::new(db.clone(), coc, twitch)
}
