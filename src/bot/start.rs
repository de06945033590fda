use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;
use tracing::info;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client and hands back its HTTP handle so the
/// scheduler and services can send messages without a second connection.
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler { state };

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();
    Ok((client, http))
}

/// Runs the gateway connection. Blocks until shutdown, so callers usually
/// spawn this or make it the main task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
