use serenity::all::{ActivityData, Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use tracing::{error, info};

use crate::bot::{commands, interaction};
use crate::state::AppState;

/// Discord bot event handler.
pub struct Handler {
    pub state: AppState,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is connected; registers the global slash
    /// commands.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("the clan")));

        if let Err(e) = commands::register(&ctx).await {
            error!("Failed to register slash commands: {}", e);
        } else {
            info!("Slash commands registered");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let result = match &interaction {
            Interaction::Command(command) => {
                commands::dispatch(&ctx, command, &self.state).await
            }
            Interaction::Component(component) => {
                interaction::dispatch_component(&ctx, component, &self.state).await
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            error!("Error handling interaction: {}", e);
        }
    }
}
