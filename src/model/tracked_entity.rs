//! Tracked entity domain model and the feature kinds the board supports.

use chrono::{DateTime, Utc};

/// The feature families that poll an external source and maintain a board
/// message. Membership checking and tickets are not board kinds; they use
/// their own channel keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    War,
    WarLeague,
    ClanGames,
    Stream,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::War,
        FeatureKind::WarLeague,
        FeatureKind::ClanGames,
        FeatureKind::Stream,
    ];

    /// Stable string used in the database and in command options.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::War => "war",
            FeatureKind::WarLeague => "war-league",
            FeatureKind::ClanGames => "clan-games",
            FeatureKind::Stream => "stream",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "war" => Some(FeatureKind::War),
            "war-league" => Some(FeatureKind::WarLeague),
            "clan-games" => Some(FeatureKind::ClanGames),
            "stream" => Some(FeatureKind::Stream),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable real-world thing (a clan's war, a Twitch stream) identified by
/// a stable name within its feature kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntity {
    pub id: i32,
    pub kind: FeatureKind,
    /// Clan tag for clan-scoped kinds, Twitch login for streams.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TrackedEntity {
    /// Converts an entity model at the repository boundary. Returns `None`
    /// for rows whose kind string is not a known feature kind.
    pub fn from_entity(entity: entity::tracked_entity::Model) -> Option<Self> {
        Some(Self {
            id: entity.id,
            kind: FeatureKind::parse(&entity.kind)?,
            name: entity.name,
            created_at: entity.created_at,
        })
    }

    /// Kind-qualified key under which this entity's rendered record is
    /// stored, e.g. `war:#ABC123`.
    pub fn record_key(&self) -> String {
        format!("{}:{}", self.kind.as_str(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in FeatureKind::ALL {
            assert_eq!(FeatureKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FeatureKind::parse("unknown"), None);
    }

    #[test]
    fn record_key_is_kind_qualified() {
        let entity = TrackedEntity {
            id: 1,
            kind: FeatureKind::War,
            name: "#ABC123".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(entity.record_key(), "war:#ABC123");
    }
}
