//! Administrative commands: channel mapping and manual board refresh.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup,
};

use crate::bot::commands::{
    ephemeral_response, is_admin, option_channel, option_str, user_message,
};
use crate::data::event_channel::EventChannelRepository;
use crate::model::event_channel::{MEMBERSHIP_CHANNEL_KEY, TICKETS_CHANNEL_KEY};
use crate::model::tracked_entity::FeatureKind;
use crate::reconcile::{chat::DiscordChat, ReconcileAction};
use crate::service::sync::EntitySyncService;
use crate::state::AppState;

pub fn set_event_channel_command() -> CreateCommand {
    CreateCommand::new("set_event_channel")
        .description("Set the channel a feature posts into (Admin only)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "feature", "The feature to map")
                .required(true)
                .add_string_choice("Clan war", FeatureKind::War.as_str())
                .add_string_choice("Clan war league", FeatureKind::WarLeague.as_str())
                .add_string_choice("Clan games", FeatureKind::ClanGames.as_str())
                .add_string_choice("Stream notifications", FeatureKind::Stream.as_str())
                .add_string_choice("Membership notices", MEMBERSHIP_CHANNEL_KEY)
                .add_string_choice("Ticket menu", TICKETS_CHANNEL_KEY),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel to post into",
            )
            .required(true),
        )
}

pub async fn set_event_channel(
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

    let (Some(feature), Some(channel_id)) = (
        option_str(&command.data.options, "feature"),
        option_channel(&command.data.options, "channel"),
    ) else {
        return command
            .create_response(
                &ctx.http,
                ephemeral_response("Both a feature and a channel are required."),
            )
            .await;
    };

    let content = match EventChannelRepository::new(&state.db)
        .upsert(&feature, &channel_id.to_string())
        .await
    {
        Ok(mapped) => format!(
            "**{}** messages will now be posted in <#{}>.",
            mapped.kind, mapped.channel_id
        ),
        Err(err) => user_message(&err.into()),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}

pub fn refresh_command() -> CreateCommand {
    CreateCommand::new("refresh")
        .description("Run a board update right now (Admin only)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "feature", "The board to refresh")
                .required(true)
                .add_string_choice("Clan war", FeatureKind::War.as_str())
                .add_string_choice("Clan war league", FeatureKind::WarLeague.as_str())
                .add_string_choice("Clan games", FeatureKind::ClanGames.as_str())
                .add_string_choice("Stream notifications", FeatureKind::Stream.as_str()),
        )
}

/// Manual trigger for the same reconciliation path the scheduler runs; the
/// outcome is reported back to the invoking admin instead of the logs.
pub async fn refresh(
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

    let kind = option_str(&command.data.options, "feature")
        .as_deref()
        .and_then(FeatureKind::parse);
    let Some(kind) = kind else {
        return command
            .create_response(&ctx.http, ephemeral_response("Unknown feature."))
            .await;
    };

    command.defer_ephemeral(&ctx.http).await?;

    let chat = DiscordChat::new(ctx.http.clone());
    let fetchers = state.fetchers();
    let service = EntitySyncService::new(&state.db, &chat, &state.locks, &fetchers);

    let content = match service.sync_kind(kind).await {
        Ok(results) if results.is_empty() => format!(
            "Nothing to refresh for **{}** (no channel mapping or no tracked entities).",
            kind
        ),
        Ok(results) => {
            let lines: Vec<String> = results
                .iter()
                .map(|(name, action)| match action {
                    ReconcileAction::Unchanged => format!("`{}`: already up to date", name),
                    action => format!("`{}`: {}", name, action),
                })
                .collect();
            format!("**{}** refreshed:\n{}", kind, lines.join("\n"))
        }
        Err(err) => user_message(&err),
    };

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}
