//! Clan games administration commands.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{
    ephemeral_response, is_admin, option_i64, option_str, subcommand, user_message,
};
use crate::service::clan_games::ClanGamesService;
use crate::state::AppState;

pub fn clan_games_command() -> CreateCommand {
    CreateCommand::new("clan_games")
        .description("Manage the clan games board (Admin only)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "start",
                "Open a new clan games period",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "days",
                    "How many days the event runs",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "target",
                    "Clan point target",
                )
                .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "set",
                "Record a player's points",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "player", "Player name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "points", "Current points")
                    .required(true),
            ),
        )
}

pub async fn clan_games(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    if !is_admin(command) {
        return command
            .create_response(
                &ctx.http,
                ephemeral_response("This command requires administrator permissions."),
            )
            .await;
    }

    let service = ClanGamesService::new(&state.db);

    let content = match subcommand(&command.data.options) {
        Some(("start", options)) => {
            let (Some(days), Some(target)) = (
                option_i64(options, "days"),
                option_i64(options, "target"),
            ) else {
                return command
                    .create_response(
                        &ctx.http,
                        ephemeral_response("Both days and target are required."),
                    )
                    .await;
            };

            match service.start_period(days, target as i32).await {
                Ok(period) => format!(
                    "Clan games started, running until <t:{}:R> with a target of {} points. \
                     The board updates on the next tick or `/refresh`.",
                    period.end_time.timestamp(),
                    period.target_points
                ),
                Err(err) => user_message(&err),
            }
        }
        Some(("set", options)) => {
            let (Some(player), Some(points)) = (
                option_str(options, "player"),
                option_i64(options, "points"),
            ) else {
                return command
                    .create_response(
                        &ctx.http,
                        ephemeral_response("Both a player and points are required."),
                    )
                    .await;
            };

            match service.record_points(&player, points as i32).await {
                Ok(entry) => format!(
                    "Recorded **{}** points for **{}**.",
                    entry.points, entry.player_name
                ),
                Err(err) => user_message(&err),
            }
        }
        _ => "Unknown subcommand.".to_string(),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}
