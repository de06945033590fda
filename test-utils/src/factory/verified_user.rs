//! Verified user factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for verification records with customizable fields.
///
/// Defaults: unique Discord id and player tag, role "member", no warn
/// hours.
pub struct VerifiedUserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    player_tag: String,
    player_name: String,
    clan_role: String,
    warn_hours: i32,
}

impl<'a> VerifiedUserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: format!("{}", 100_000 + id),
            player_tag: format!("#TEST{}", id),
            player_name: format!("Player {}", id),
            clan_role: "member".to_string(),
            warn_hours: 0,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn player_tag(mut self, player_tag: impl Into<String>) -> Self {
        self.player_tag = player_tag.into();
        self
    }

    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    pub fn clan_role(mut self, clan_role: impl Into<String>) -> Self {
        self.clan_role = clan_role.into();
        self
    }

    pub fn warn_hours(mut self, warn_hours: i32) -> Self {
        self.warn_hours = warn_hours;
        self
    }

    pub async fn build(self) -> Result<entity::verified_user::Model, DbErr> {
        let now = Utc::now();

        entity::verified_user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            player_tag: ActiveValue::Set(self.player_tag),
            player_name: ActiveValue::Set(self.player_name),
            clan_role: ActiveValue::Set(self.clan_role),
            warn_hours: ActiveValue::Set(self.warn_hours),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}
