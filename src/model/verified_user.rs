use chrono::{DateTime, Utc};

/// Hours a departed player is warned before being kicked.
pub const KICK_AFTER_WARN_HOURS: i32 = 72;

/// A Discord member linked to a Clash of Clans account.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedUser {
    pub discord_id: String,
    pub player_tag: String,
    pub player_name: String,
    pub clan_role: String,
    pub warn_hours: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VerifiedUser {
    pub fn from_entity(entity: entity::verified_user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            player_tag: entity.player_tag,
            player_name: entity.player_name,
            clan_role: entity.clan_role,
            warn_hours: entity.warn_hours,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Maps the in-game clan role to the Discord role name used on the
    /// server. The API reports elders as "admin".
    pub fn discord_role_name(clan_role: &str) -> Option<&'static str> {
        match clan_role {
            "leader" => Some("Leader"),
            "coLeader" => Some("Co-Leader"),
            "admin" => Some("Elder"),
            "member" => Some("Member"),
            _ => None,
        }
    }
}

/// Parameters for creating or refreshing a verification record.
#[derive(Debug, Clone)]
pub struct UpsertVerifiedUserParam {
    pub discord_id: String,
    pub player_tag: String,
    pub player_name: String,
    pub clan_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_api_roles_to_discord_role_names() {
        assert_eq!(VerifiedUser::discord_role_name("leader"), Some("Leader"));
        assert_eq!(VerifiedUser::discord_role_name("admin"), Some("Elder"));
        assert_eq!(VerifiedUser::discord_role_name("member"), Some("Member"));
        assert_eq!(VerifiedUser::discord_role_name("spectator"), None);
    }
}
