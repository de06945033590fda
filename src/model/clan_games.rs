use chrono::{DateTime, Utc};

/// A clan games event window with its point target.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanGamesPeriod {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub target_points: i32,
    pub created_at: DateTime<Utc>,
}

impl ClanGamesPeriod {
    pub fn from_entity(entity: entity::clan_games_period::Model) -> Self {
        Self {
            id: entity.id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            target_points: entity.target_points,
            created_at: entity.created_at,
        }
    }
}

/// Per-player point entry within a clan games period.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanGamesEntry {
    pub id: i32,
    pub period_id: i32,
    pub player_name: String,
    pub points: i32,
    pub updated_at: DateTime<Utc>,
}

impl ClanGamesEntry {
    pub fn from_entity(entity: entity::clan_games_entry::Model) -> Self {
        Self {
            id: entity.id,
            period_id: entity.period_id,
            player_name: entity.player_name,
            points: entity.points,
            updated_at: entity.updated_at,
        }
    }
}
