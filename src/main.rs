mod bot;
mod config;
mod data;
mod error;
mod fetch;
mod model;
mod presenter;
mod reconcile;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::fetch::{coc::CocClient, twitch::TwitchClient};
use crate::reconcile::EntityLocks;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "clanboard=info,serenity=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_tracked_clan(&db, &config.clan_tag).await?;

    let http_client = startup::setup_reqwest_client()?;
    let coc = Arc::new(CocClient::new(
        http_client.clone(),
        config.coc_api_token.clone(),
    ));
    let twitch = Arc::new(TwitchClient::new(
        http_client,
        config.twitch_client_id.clone(),
        config.twitch_client_secret.clone(),
    )?);
    let locks = Arc::new(EntityLocks::default());

    let state = AppState::new(db, coc, twitch, locks, config.clone());

    info!("Starting clanboard");

    let (client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    scheduler::start_scheduler(state, discord_http).await?;

    // Blocks until the gateway connection shuts down.
    bot::start::start_bot(client).await?;

    Ok(())
}
