//! Ticket system setup command.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::commands::{ephemeral_response, is_admin, option_channel, user_message};
use crate::data::event_channel::EventChannelRepository;
use crate::model::event_channel::TICKETS_CHANNEL_KEY;
use crate::reconcile::chat::DiscordChat;
use crate::service::ticket::TicketService;
use crate::state::AppState;

pub fn ticket_setup_command() -> CreateCommand {
    CreateCommand::new("ticket_setup")
        .description("Post or repair the ticket menu in a channel (Admin only)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel for the ticket menu",
            )
            .required(true),
        )
}

pub async fn ticket_setup(
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

    let Some(channel_id) = option_channel(&command.data.options, "channel") else {
        return command
            .create_response(&ctx.http, ephemeral_response("A channel is required."))
            .await;
    };

    let result = async {
        EventChannelRepository::new(&state.db)
            .upsert(TICKETS_CHANNEL_KEY, &channel_id.to_string())
            .await?;

        let chat = DiscordChat::new(ctx.http.clone());
        let service = TicketService::new(&state.db, ctx.http.clone());
        service
            .ensure_menu(&chat, &state.locks, channel_id.get())
            .await
    }
    .await;

    let content = match result {
        Ok(action) => format!(
            "Ticket menu in <#{}> is ready ({}).",
            channel_id.get(),
            action
        ),
        Err(err) => user_message(&err),
    };

    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await
}
