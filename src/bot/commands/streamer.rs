//! Tracked streamer management.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};
use tracing::warn;

use crate::bot::commands::{ephemeral_response, is_admin, option_str, user_message};
use crate::data::tracked_entity::TrackedEntityRepository;
use crate::model::tracked_entity::FeatureKind;
use crate::reconcile::{chat::DiscordChat, Reconciler};
use crate::state::AppState;

pub fn streamer_command() -> CreateCommand {
    CreateCommand::new("streamer")
        .description("Add or remove a tracked Twitch streamer (Admin only)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "action", "What to do")
                .required(true)
                .add_string_choice("Add", "add")
                .add_string_choice("Remove", "remove"),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "The streamer's Twitch login",
            )
            .required(true),
        )
}

pub fn streamer_list_command() -> CreateCommand {
    CreateCommand::new("streamer_list").description("List the tracked Twitch streamers")
}

pub async fn streamer(
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

    let (Some(action), Some(name)) = (
        option_str(&command.data.options, "action"),
        option_str(&command.data.options, "name"),
    ) else {
        return command
            .create_response(
                &ctx.http,
                ephemeral_response("Both an action and a name are required."),
            )
            .await;
    };

    let login = name.trim().to_lowercase();
    let repo = TrackedEntityRepository::new(&state.db);

    let content = match action.as_str() {
        "add" => match repo.ensure(FeatureKind::Stream, &login).await {
            Ok(true) => format!("Streamer **{}** is now tracked.", login),
            Ok(false) => format!("Streamer **{}** is already tracked.", login),
            Err(err) => user_message(&err.into()),
        },
        "remove" => match repo.delete(FeatureKind::Stream, &login).await {
            Ok(0) => format!("Streamer **{}** is not tracked.", login),
            Ok(_) => {
                // Take down a live board the streamer may still have. With
                // absent observed state the reconciler deletes against the
                // record's own stored channel, so the channel argument here
                // is never used.
                let chat = DiscordChat::new(ctx.http.clone());
                let record_key = format!("{}:{}", FeatureKind::Stream.as_str(), login);
                if let Err(e) = Reconciler::new(&state.db, &chat, &state.locks)
                    .reconcile(&record_key, 0, None)
                    .await
                {
                    warn!("failed to remove live board for {}: {}", login, e);
                }
                format!("Streamer **{}** is no longer tracked.", login)
            }
            Err(err) => user_message(&err.into()),
        },
        _ => "Unknown action.".to_string(),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}

pub async fn streamer_list(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let content = match TrackedEntityRepository::new(&state.db)
        .get_by_kind(FeatureKind::Stream)
        .await
    {
        Ok(entities) if entities.is_empty() => "No streamers are currently tracked.".to_string(),
        Ok(entities) => {
            let lines: Vec<String> = entities
                .iter()
                .map(|entity| format!("- {}", entity.name))
                .collect();
            format!("**Tracked streamers:**\n{}", lines.join("\n"))
        }
        Err(err) => user_message(&err.into()),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}
