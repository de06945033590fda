//! Verification and data-privacy commands.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup, GuildId, RoleId, UserId,
};
use tracing::warn;

use crate::bot::commands::{ephemeral_response, option_str, user_message};
use crate::data::verified_user::VerifiedUserRepository;
use crate::service::verification::VerificationService;
use crate::state::AppState;

/// The Discord role names managed by verification.
const MANAGED_ROLE_NAMES: [&str; 4] = ["Leader", "Co-Leader", "Elder", "Member"];

pub fn verify_command() -> CreateCommand {
    CreateCommand::new("verify")
        .description("Link your Discord account to your Clash of Clans account")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "player_tag",
                "Your player tag, e.g. #ABC123",
            )
            .required(true),
        )
}

pub fn my_data_command() -> CreateCommand {
    CreateCommand::new("my_data").description("Show the data stored about you")
}

pub fn delete_data_command() -> CreateCommand {
    CreateCommand::new("delete_data").description("Delete all data stored about you")
}

pub fn privacy_command() -> CreateCommand {
    CreateCommand::new("privacy").description("What data this bot stores and for how long")
}

pub async fn verify(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let Some(player_tag) = option_str(&command.data.options, "player_tag") else {
        return command
            .create_response(&ctx.http, ephemeral_response("Player tag is required."))
            .await;
    };
    let Some(guild_id) = command.guild_id else {
        return command
            .create_response(
                &ctx.http,
                ephemeral_response("This command only works in a server."),
            )
            .await;
    };

    // The profile lookup can take a moment; acknowledge first.
    command.defer_ephemeral(&ctx.http).await?;

    let service = VerificationService::new(&state.db, &state.coc, &state.config.clan_tag);

    let content = match service.verify(command.user.id.get(), &player_tag).await {
        Ok(outcome) => {
            let member_roles = command
                .member
                .as_ref()
                .map(|member| member.roles.clone())
                .unwrap_or_default();

            let role_note = match sync_clan_role(
                ctx,
                guild_id,
                command.user.id,
                &member_roles,
                outcome.role_name,
            )
            .await
            {
                Ok(Some(role)) => format!(" Your server role is now **{}**.", role),
                Ok(None) => String::new(),
                Err(e) => {
                    warn!("role sync failed for {}: {}", command.user.id, e);
                    " (Role sync failed; ask an admin to check the bot's permissions.)".to_string()
                }
            };

            format!(
                "Successfully verified as **{}** in clan **{}**.{}",
                outcome.user.player_name, outcome.clan_name, role_note
            )
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

/// Assigns the Discord role matching the clan role and strips the other
/// managed roles the member still carries.
async fn sync_clan_role(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
    member_roles: &[RoleId],
    target_role_name: Option<&'static str>,
) -> serenity::Result<Option<String>> {
    let roles = ctx.http.get_guild_roles(guild_id).await?;

    let mut assigned = None;
    for role in roles
        .iter()
        .filter(|role| MANAGED_ROLE_NAMES.contains(&role.name.as_str()))
    {
        if Some(role.name.as_str()) == target_role_name {
            ctx.http
                .add_member_role(guild_id, user_id, role.id, Some("Clan verification"))
                .await?;
            assigned = Some(role.name.clone());
        } else if member_roles.contains(&role.id) {
            ctx.http
                .remove_member_role(guild_id, user_id, role.id, Some("Clan role changed"))
                .await?;
        }
    }

    Ok(assigned)
}

pub async fn my_data(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let repo = VerifiedUserRepository::new(&state.db);

    let content = match repo
        .find_by_discord_id(&command.user.id.to_string())
        .await
    {
        Ok(Some(user)) => format!(
            "**Your stored data:**\n- Discord ID: {}\n- Player tag: {}\n- Player name: {}\n- Clan role: {}",
            user.discord_id, user.player_tag, user.player_name, user.clan_role
        ),
        Ok(None) => "No data is stored about your account.".to_string(),
        Err(err) => user_message(&err.into()),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}

pub async fn delete_data(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let service = VerificationService::new(&state.db, &state.coc, &state.config.clan_tag);

    let content = match service.forget(command.user.id.get()).await {
        Ok(true) => {
            // Strip the managed roles along with the record.
            if let Some(guild_id) = command.guild_id {
                let member_roles = command
                    .member
                    .as_ref()
                    .map(|member| member.roles.clone())
                    .unwrap_or_default();
                if let Err(e) =
                    sync_clan_role(ctx, guild_id, command.user.id, &member_roles, None).await
                {
                    warn!("role removal failed for {}: {}", command.user.id, e);
                }
            }
            "All stored data about your account has been deleted.".to_string()
        }
        Ok(false) => "No data is stored about your account.".to_string(),
        Err(err) => user_message(&err),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}

pub async fn privacy(ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
    let content = "**Privacy information**\n\
        This bot stores: your Discord ID, your Clash of Clans player tag, \
        your player name, and your clan role.\n\n\
        **Retention:**\n\
        - Data is kept while you are a clan member.\n\
        - If you leave the clan, your record is removed after the 72 hour \
        grace period.\n\
        - `/delete_data` removes everything immediately.";

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}
