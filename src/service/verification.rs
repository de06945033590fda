//! Clan membership verification.

use sea_orm::DatabaseConnection;

use crate::data::verified_user::VerifiedUserRepository;
use crate::error::{fetch::FetchError, AppError};
use crate::fetch::coc::CocClient;
use crate::model::verified_user::{UpsertVerifiedUserParam, VerifiedUser};

pub struct VerificationOutcome {
    pub user: VerifiedUser,
    pub clan_name: String,
    /// Discord role name mapped from the in-game role, when the role is one
    /// of the known four.
    pub role_name: Option<&'static str>,
}

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    coc: &'a CocClient,
    clan_tag: &'a str,
}

impl<'a> VerificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, coc: &'a CocClient, clan_tag: &'a str) -> Self {
        Self { db, coc, clan_tag }
    }

    /// Links a Discord user to a Clash of Clans account.
    ///
    /// The player must exist and be a member of the configured clan.
    /// Re-verifying refreshes the stored name and role and resets the
    /// departed-warning counter.
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome)` - Record stored; carries the Discord role
    ///   to assign
    /// - `Err(AppError::NotFound)` - No player with that tag
    /// - `Err(AppError::BadRequest)` - Player is clanless or in another clan
    pub async fn verify(
        &self,
        discord_id: u64,
        player_tag: &str,
    ) -> Result<VerificationOutcome, AppError> {
        let profile = match self.coc.player(player_tag).await {
            Ok(profile) => profile,
            Err(FetchError::Permanent { .. }) => {
                return Err(AppError::NotFound(format!(
                    "No player found for tag `{}`.",
                    player_tag
                )))
            }
            Err(err) => return Err(err.into()),
        };

        let clan = profile.clan.ok_or_else(|| {
            AppError::BadRequest("This player is not a member of any clan.".to_string())
        })?;

        if clan.tag != self.clan_tag {
            return Err(AppError::BadRequest(format!(
                "Player **{}** is not a member of clan `{}`.",
                profile.name, self.clan_tag
            )));
        }

        let clan_role = profile.role.unwrap_or_else(|| "member".to_string());

        let user = VerifiedUserRepository::new(self.db)
            .upsert(UpsertVerifiedUserParam {
                discord_id: discord_id.to_string(),
                player_tag: profile.tag,
                player_name: profile.name,
                clan_role: clan_role.clone(),
            })
            .await?;

        Ok(VerificationOutcome {
            user,
            clan_name: clan.name,
            role_name: VerifiedUser::discord_role_name(&clan_role),
        })
    }

    /// Removes a user's verification record.
    ///
    /// # Returns
    /// - `Ok(true)` - A record existed and was deleted
    /// - `Ok(false)` - Nothing was stored for this user
    pub async fn forget(&self, discord_id: u64) -> Result<bool, AppError> {
        let deleted = VerifiedUserRepository::new(self.db)
            .delete_by_discord_id(&discord_id.to_string())
            .await?;

        Ok(deleted > 0)
    }
}
