//! Slash command registration and dispatch.

pub mod admin;
pub mod clan_games;
pub mod streamer;
pub mod ticket;
pub mod verify;
pub mod war;

use serenity::all::{
    ChannelId, Command, CommandDataOption, CommandDataOptionValue, CommandInteraction, Context,
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tracing::{error, warn};

use crate::error::AppError;
use crate::state::AppState;

pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        verify::verify_command(),
        verify::my_data_command(),
        verify::delete_data_command(),
        verify::privacy_command(),
        admin::set_event_channel_command(),
        admin::refresh_command(),
        clan_games::clan_games_command(),
        streamer::streamer_command(),
        streamer::streamer_list_command(),
        war::war_stats_command(),
        ticket::ticket_setup_command(),
    ]
}

pub async fn register(ctx: &Context) -> serenity::Result<()> {
    Command::set_global_commands(&ctx.http, command_definitions()).await?;
    Ok(())
}

pub async fn dispatch(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    match command.data.name.as_str() {
        "verify" => verify::verify(ctx, command, state).await,
        "my_data" => verify::my_data(ctx, command, state).await,
        "delete_data" => verify::delete_data(ctx, command, state).await,
        "privacy" => verify::privacy(ctx, command).await,
        "set_event_channel" => admin::set_event_channel(ctx, command, state).await,
        "refresh" => admin::refresh(ctx, command, state).await,
        "clan_games" => clan_games::clan_games(ctx, command, state).await,
        "streamer" => streamer::streamer(ctx, command, state).await,
        "streamer_list" => streamer::streamer_list(ctx, command, state).await,
        "war_stats" => war::war_stats(ctx, command, state).await,
        "ticket_setup" => ticket::ticket_setup(ctx, command, state).await,
        other => {
            warn!("Unknown command: {}", other);
            Ok(())
        }
    }
}

/// Ephemeral text response used by every command reply.
pub fn ephemeral_response(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Short human-readable message for a command failure. Domain misses keep
/// their text; infrastructure failures are logged and collapsed to a
/// generic line.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(message) | AppError::BadRequest(message) => message.clone(),
        other => {
            error!("command failed: {}", other);
            "Something went wrong. Please try again later.".to_string()
        }
    }
}

/// Whether the invoking member has administrator permissions.
pub fn is_admin(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .map(|permissions| permissions.administrator())
        .unwrap_or(false)
}

pub fn option_str(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .map(|value| value.to_string())
}

pub fn option_i64(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_i64())
}

pub fn option_channel(options: &[CommandDataOption], name: &str) -> Option<ChannelId> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_channel_id())
}

/// Unpacks a subcommand option into its name and nested options.
pub fn subcommand(options: &[CommandDataOption]) -> Option<(&str, &[CommandDataOption])> {
    options.first().and_then(|option| match &option.value {
        CommandDataOptionValue::SubCommand(nested) => Some((option.name.as_str(), nested.as_slice())),
        _ => None,
    })
}
