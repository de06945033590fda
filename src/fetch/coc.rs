//! Clash of Clans API client.
//!
//! Thin wrapper over the REST API with bearer-token auth. Response DTOs are
//! converted into snapshot/domain types at this boundary so API field names
//! never leak further in.

use serde::Deserialize;

use crate::error::fetch::FetchError;
use crate::model::snapshot::{WarClan, WarMember, WarSnapshot, WarState};

pub const COC_API_BASE_URL: &str = "https://api.clashofclans.com/v1";

pub struct CocClient {
    http: reqwest::Client,
    token: String,
}

impl CocClient {
    pub fn new(http: reqwest::Client, token: String) -> Self {
        Self { http, token }
    }

    /// Clan and player tags start with `#`, which must be percent-encoded in
    /// paths. Tags supplied without the hash are tolerated.
    fn encode_tag(tag: &str) -> String {
        let tag = tag.trim();
        let tag = tag.strip_prefix('#').unwrap_or(tag);
        format!("%23{}", tag)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(format!("{}{}", COC_API_BASE_URL, path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }

        response.json::<T>().await.map_err(FetchError::from)
    }

    /// Fetches the clan's current war.
    ///
    /// # Returns
    /// - `Ok(Some(WarSnapshot))` - A war in preparation, battle day, or just
    ///   ended
    /// - `Ok(None)` - The clan is not in a war (`notInWar`)
    /// - `Err(FetchError::Permanent)` - Clan not found (404)
    /// - `Err(FetchError::Transient)` - Network or server failure
    pub async fn current_war(&self, clan_tag: &str) -> Result<Option<WarSnapshot>, FetchError> {
        let dto: CurrentWarDto = self
            .get_json(&format!("/clans/{}/currentwar", Self::encode_tag(clan_tag)))
            .await?;

        Ok(dto.into_snapshot())
    }

    /// Fetches a player's profile.
    pub async fn player(&self, player_tag: &str) -> Result<PlayerProfile, FetchError> {
        self.get_json(&format!("/players/{}", Self::encode_tag(player_tag)))
            .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentWarDto {
    state: String,
    #[serde(default)]
    war_league: Option<WarLeagueDto>,
    #[serde(default)]
    clan: Option<WarClanDto>,
    #[serde(default)]
    opponent: Option<WarClanDto>,
}

/// Presence of this object in the response marks a war-league round; its
/// contents are not used.
#[derive(Debug, Deserialize)]
struct WarLeagueDto {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarClanDto {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    clan_level: u32,
    #[serde(default)]
    stars: u32,
    #[serde(default)]
    attacks: u32,
    #[serde(default)]
    badge_urls: Option<BadgeUrlsDto>,
    #[serde(default)]
    members: Vec<WarMemberDto>,
}

#[derive(Debug, Deserialize)]
struct BadgeUrlsDto {
    #[serde(default)]
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarMemberDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    townhall_level: u32,
    #[serde(default)]
    map_position: u32,
    #[serde(default)]
    stars: u32,
    #[serde(default)]
    attacks: Vec<WarAttackDto>,
}

/// Only the number of attacks matters; the attack details are not rendered.
#[derive(Debug, Deserialize)]
struct WarAttackDto {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
}

fn parse_war_state(state: &str) -> Option<WarState> {
    match state {
        "preparation" => Some(WarState::Preparation),
        "inWar" => Some(WarState::InWar),
        "warEnded" => Some(WarState::Ended),
        _ => None,
    }
}

impl CurrentWarDto {
    fn into_snapshot(self) -> Option<WarSnapshot> {
        let state = parse_war_state(&self.state)?;
        let league = self.war_league.is_some();
        let clan = self.clan?.into_clan();
        let opponent = self.opponent?.into_clan();

        Some(WarSnapshot {
            state,
            league,
            clan,
            opponent,
        })
    }
}

impl WarClanDto {
    fn into_clan(self) -> WarClan {
        let mut members = self.members;
        members.sort_by_key(|m| m.map_position);

        WarClan {
            tag: self.tag,
            name: self.name,
            level: self.clan_level,
            stars: self.stars,
            attacks: self.attacks,
            badge_url: self.badge_urls.and_then(|b| b.small),
            members: members
                .into_iter()
                .map(|m| WarMember {
                    name: m.name,
                    town_hall_level: m.townhall_level,
                    stars: m.stars,
                    attacks_used: m.attacks.len() as u32,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_an_active_war_response() {
        let raw = r##"{
            "state": "inWar",
            "clan": {
                "tag": "#AAA",
                "name": "Alpha",
                "clanLevel": 12,
                "stars": 5,
                "attacks": 7,
                "badgeUrls": {"small": "https://example.com/badge.png"},
                "members": [
                    {"name": "Late", "townhallLevel": 15, "mapPosition": 2, "stars": 3, "attacks": [{"order": 1}]},
                    {"name": "Early", "townhallLevel": 14, "mapPosition": 1, "stars": 2, "attacks": []}
                ]
            },
            "opponent": {"tag": "#BBB", "name": "Bravo", "clanLevel": 11, "stars": 3, "attacks": 6, "members": []}
        }"##;

        let dto: CurrentWarDto = serde_json::from_str(raw).unwrap();
        let war = dto.into_snapshot().unwrap();

        assert_eq!(war.state, WarState::InWar);
        assert!(!war.league);
        assert_eq!(war.clan.stars, 5);
        assert_eq!(war.clan.badge_url.as_deref(), Some("https://example.com/badge.png"));
        // Members come back ordered by map position.
        assert_eq!(war.clan.members[0].name, "Early");
        assert_eq!(war.clan.members[1].attacks_used, 1);
    }

    #[test]
    fn not_in_war_maps_to_absent() {
        let dto: CurrentWarDto = serde_json::from_str(r#"{"state": "notInWar"}"#).unwrap();
        assert!(dto.into_snapshot().is_none());
    }

    #[test]
    fn war_league_flag_is_detected() {
        let raw = r##"{
            "state": "inWar",
            "warLeague": {"name": "Crystal League I"},
            "clan": {"tag": "#AAA", "name": "Alpha", "clanLevel": 12, "stars": 1, "attacks": 2, "members": []},
            "opponent": {"tag": "#BBB", "name": "Bravo", "clanLevel": 11, "stars": 0, "attacks": 1, "members": []}
        }"##;

        let dto: CurrentWarDto = serde_json::from_str(raw).unwrap();
        assert!(dto.into_snapshot().unwrap().league);
    }

    #[test]
    fn encodes_tags_with_and_without_hash() {
        assert_eq!(CocClient::encode_tag("#ABC123"), "%23ABC123");
        assert_eq!(CocClient::encode_tag("ABC123"), "%23ABC123");
    }
}
