//! Interactive paginated war overview.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponseFollowup,
};

use crate::bot::commands::user_message;
use crate::bot::interaction::pager_row;
use crate::data::page_session::PageSessionRepository;
use crate::error::fetch::FetchError;
use crate::model::page_session::UpsertPageSessionParam;
use crate::model::snapshot::Snapshot;
use crate::model::tracked_entity::FeatureKind;
use crate::presenter::{self, to_embed};
use crate::state::AppState;

pub fn war_stats_command() -> CreateCommand {
    CreateCommand::new("war_stats").description("Show the current clan war with player details")
}

pub async fn war_stats(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    command.defer_ephemeral(&ctx.http).await?;

    let war = match state.coc.current_war(&state.config.clan_tag).await {
        Ok(Some(war)) => war,
        Ok(None) | Err(FetchError::Permanent { .. }) => {
            command
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new()
                        .content("No clan war is currently running.")
                        .ephemeral(true),
                )
                .await?;
            return Ok(());
        }
        Err(err) => {
            command
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new()
                        .content(user_message(&err.into()))
                        .ephemeral(true),
                )
                .await?;
            return Ok(());
        }
    };

    let payload = presenter::render(&Snapshot::War(war), 0);

    let message = command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .embed(to_embed(&payload))
                .components(vec![pager_row()])
                .ephemeral(true),
        )
        .await?;

    // Remember where this view is so the arrow buttons can page it.
    if let Err(e) = PageSessionRepository::new(&state.db)
        .upsert(UpsertPageSessionParam {
            message_id: message.id.to_string(),
            kind: FeatureKind::War,
            entity_name: state.config.clan_tag.clone(),
            page: payload.page as i32,
        })
        .await
    {
        tracing::warn!("failed to store page session: {}", e);
    }

    Ok(())
}
