//! Hourly clan membership audit.
//!
//! Verified users who leave the clan accumulate warn hours; after 72 hours
//! outside the clan they are kicked from the server and their record is
//! removed. Players back in the clan get their counter reset.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateMessage, GuildId, UserId};
use serenity::http::Http;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::data::{event_channel::EventChannelRepository, verified_user::VerifiedUserRepository};
use crate::error::{fetch::FetchError, AppError};
use crate::fetch::coc::CocClient;
use crate::model::event_channel::MEMBERSHIP_CHANNEL_KEY;
use crate::model::verified_user::{VerifiedUser, KICK_AFTER_WARN_HOURS};
use crate::util::parse::parse_u64_from_string;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MembershipReport {
    pub checked: usize,
    pub warned: usize,
    pub kicked: usize,
    pub reset: usize,
}

enum Outcome {
    InClan,
    Reset,
    Warned,
    Kicked,
}

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
    coc: &'a CocClient,
    http: Arc<Http>,
    guild_id: u64,
    clan_tag: &'a str,
}

impl<'a> MembershipService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        coc: &'a CocClient,
        http: Arc<Http>,
        guild_id: u64,
        clan_tag: &'a str,
    ) -> Self {
        Self {
            db,
            coc,
            http,
            guild_id,
            clan_tag,
        }
    }

    /// Audits every verified user. Failures are isolated per user so one
    /// flaky profile lookup cannot abort the rest of the sweep.
    pub async fn run(&self) -> Result<MembershipReport, AppError> {
        let users = VerifiedUserRepository::new(self.db).get_all().await?;

        let mut report = MembershipReport::default();
        for user in users {
            report.checked += 1;
            match self.check_user(&user).await {
                Ok(Outcome::InClan) => {}
                Ok(Outcome::Reset) => report.reset += 1,
                Ok(Outcome::Warned) => report.warned += 1,
                Ok(Outcome::Kicked) => report.kicked += 1,
                Err(e) => error!("membership check failed for {}: {}", user.player_tag, e),
            }
        }

        info!(
            "membership sweep: {} checked, {} warned, {} kicked, {} reset",
            report.checked, report.warned, report.kicked, report.reset
        );
        Ok(report)
    }

    async fn check_user(&self, user: &VerifiedUser) -> Result<Outcome, AppError> {
        let in_clan = match self.coc.player(&user.player_tag).await {
            Ok(profile) => profile
                .clan
                .map(|clan| clan.tag == self.clan_tag)
                .unwrap_or(false),
            // Account deleted upstream counts as departed.
            Err(FetchError::Permanent { .. }) => false,
            Err(err) => return Err(err.into()),
        };

        let repo = VerifiedUserRepository::new(self.db);

        if in_clan {
            if user.warn_hours > 0 {
                repo.set_warn_hours(&user.discord_id, 0).await?;
                return Ok(Outcome::Reset);
            }
            return Ok(Outcome::InClan);
        }

        let warn_hours = user.warn_hours + 1;
        if warn_hours < KICK_AFTER_WARN_HOURS {
            repo.set_warn_hours(&user.discord_id, warn_hours).await?;
            return Ok(Outcome::Warned);
        }

        self.kick(user).await?;
        repo.delete_by_discord_id(&user.discord_id).await?;
        self.announce(&format!(
            "**{} {}** left the clan and was removed from the server after {} hours.",
            user.player_tag, user.player_name, KICK_AFTER_WARN_HOURS
        ))
        .await;

        Ok(Outcome::Kicked)
    }

    async fn kick(&self, user: &VerifiedUser) -> Result<(), AppError> {
        let user_id = parse_u64_from_string(&user.discord_id)?;

        self.http
            .kick_member(
                GuildId::new(self.guild_id),
                UserId::new(user_id),
                Some("No longer a clan member (72 hour limit exceeded)"),
            )
            .await?;

        info!("kicked {} ({})", user.player_name, user.discord_id);
        Ok(())
    }

    /// Best-effort notice to the membership channel, when one is configured.
    async fn announce(&self, content: &str) {
        let channel = match EventChannelRepository::new(self.db)
            .get(MEMBERSHIP_CHANNEL_KEY)
            .await
        {
            Ok(Some(channel)) => channel,
            Ok(None) => return,
            Err(e) => {
                warn!("membership channel lookup failed: {}", e);
                return;
            }
        };

        let Ok(channel_id) = parse_u64_from_string(&channel.channel_id) else {
            warn!("membership channel id is not numeric");
            return;
        };

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
        {
            warn!("membership announcement failed: {}", e);
        }
    }
}
