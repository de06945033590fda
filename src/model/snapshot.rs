//! Observed state produced by each poll.
//!
//! Snapshots are ephemeral: they exist only between a fetch and the rendering
//! of a display payload, and are never persisted.

use chrono::{DateTime, Utc};

/// One poll result for a tracked entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    War(WarSnapshot),
    ClanGames(ClanGamesSnapshot),
    Stream(StreamSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarState {
    Preparation,
    InWar,
    Ended,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarSnapshot {
    pub state: WarState,
    /// Whether this war belongs to a clan war league round.
    pub league: bool,
    pub clan: WarClan,
    pub opponent: WarClan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarClan {
    pub tag: String,
    pub name: String,
    pub level: u32,
    pub stars: u32,
    pub attacks: u32,
    pub badge_url: Option<String>,
    pub members: Vec<WarMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarMember {
    pub name: String,
    pub town_hall_level: u32,
    pub stars: u32,
    pub attacks_used: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClanGamesSnapshot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub target_points: i32,
    pub total_points: i32,
    pub players: Vec<ClanGamesPlayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClanGamesPlayer {
    pub name: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamSnapshot {
    pub login: String,
    pub user_name: String,
    pub title: String,
    pub game_name: String,
    pub viewer_count: u64,
    pub thumbnail_url: Option<String>,
    pub profile_image_url: Option<String>,
}
