//! Component (button) interaction handling.
//!
//! Pagination buttons consume the per-message page session; ticket buttons
//! drive the open/claim/close transitions.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tracing::{debug, warn};

use crate::bot::commands::user_message;
use crate::data::page_session::PageSessionRepository;
use crate::error::fetch::FetchError;
use crate::model::page_session::{PageSession, UpsertPageSessionParam};
use crate::model::tracked_entity::TrackedEntity;
use crate::presenter::{self, ticket::{CLAIM_TICKET_ID, CLOSE_TICKET_ID, OPEN_TICKET_ID}, to_embed};
use crate::service::ticket::TicketService;
use crate::state::AppState;

pub const PAGER_PREV_ID: &str = "pager:prev";
pub const PAGER_NEXT_ID: &str = "pager:next";

/// The previous/next row attached to paginated views.
pub fn pager_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(PAGER_PREV_ID)
            .label("◀")
            .style(ButtonStyle::Secondary),
        CreateButton::new(PAGER_NEXT_ID)
            .label("▶")
            .style(ButtonStyle::Secondary),
    ])
}

pub async fn dispatch_component(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    match component.data.custom_id.as_str() {
        PAGER_PREV_ID => page_turn(ctx, component, state, -1).await,
        PAGER_NEXT_ID => page_turn(ctx, component, state, 1).await,
        OPEN_TICKET_ID => open_ticket(ctx, component, state).await,
        CLAIM_TICKET_ID => claim_ticket(ctx, component, state).await,
        CLOSE_TICKET_ID => close_ticket(ctx, component, state).await,
        other => {
            debug!("unhandled component interaction: {}", other);
            Ok(())
        }
    }
}

fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

async fn page_turn(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    delta: i32,
) -> serenity::Result<()> {
    let repo = PageSessionRepository::new(&state.db);

    let session = match repo.get(&component.message.id.to_string()).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return component
                .create_response(
                    &ctx.http,
                    ephemeral("This view has expired. Run the command again."),
                )
                .await;
        }
        Err(err) => {
            return component
                .create_response(&ctx.http, ephemeral(user_message(&err.into())))
                .await;
        }
    };

    // Re-fetch on every page turn so the view never shows stale numbers.
    let fetchers = state.fetchers();
    let snapshot = fetchers
        .for_kind(session.kind)
        .poll(&session_entity(&session))
        .await;

    match snapshot {
        Ok(Some(snapshot)) => {
            let requested = (session.page + delta).max(0) as usize;
            let payload = presenter::render(&snapshot, requested);

            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::UpdateMessage(
                        CreateInteractionResponseMessage::new()
                            .embed(to_embed(&payload))
                            .components(vec![pager_row()]),
                    ),
                )
                .await?;

            if let Err(e) = repo
                .upsert(UpsertPageSessionParam {
                    message_id: session.message_id.clone(),
                    kind: session.kind,
                    entity_name: session.entity_name.clone(),
                    page: payload.page as i32,
                })
                .await
            {
                warn!("failed to move page session: {}", e);
            }
            Ok(())
        }
        Ok(None) | Err(FetchError::Permanent { .. }) => {
            component
                .create_response(&ctx.http, ephemeral("This event is no longer running."))
                .await
        }
        Err(err) => {
            component
                .create_response(&ctx.http, ephemeral(user_message(&err.into())))
                .await
        }
    }
}

/// The session stores only kind and name; rebuild the entity shape the
/// fetchers expect.
fn session_entity(session: &PageSession) -> TrackedEntity {
    TrackedEntity {
        id: 0,
        kind: session.kind,
        name: session.entity_name.clone(),
        created_at: session.created_at,
    }
}

async fn open_ticket(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let Some(guild_id) = component.guild_id else {
        return component
            .create_response(&ctx.http, ephemeral("Tickets only work in a server."))
            .await;
    };

    let service = TicketService::new(&state.db, ctx.http.clone());

    let content = match service
        .open(guild_id.get(), component.user.id.get())
        .await
    {
        Ok((ticket, channel_id)) => {
            format!("Ticket **#{}** created: <#{}>", ticket.id, channel_id)
        }
        Err(err) => user_message(&err),
    };

    component
        .create_response(&ctx.http, ephemeral(content))
        .await
}

async fn claim_ticket(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let service = TicketService::new(&state.db, ctx.http.clone());

    let content = match service.claim(component.channel_id.get()).await {
        Ok(ticket) => format!(
            "Ticket **#{}** claimed by <@{}>.",
            ticket.id, component.user.id
        ),
        Err(err) => user_message(&err),
    };

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await
}

async fn close_ticket(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
) -> serenity::Result<()> {
    let service = TicketService::new(&state.db, ctx.http.clone());

    let content = match service.close(component.channel_id.get()).await {
        Ok(ticket) => format!(
            "Ticket **#{}** closed by <@{}>.",
            ticket.id, component.user.id
        ),
        Err(err) => user_message(&err),
    };

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await
}
