use chrono::{DateTime, Utc};

/// Channel key for membership join/leave/kick announcements.
pub const MEMBERSHIP_CHANNEL_KEY: &str = "membership";
/// Channel key for the support ticket menu.
pub const TICKETS_CHANNEL_KEY: &str = "tickets";

/// Admin-configured mapping from a feature kind to the Discord channel its
/// messages are posted in.
#[derive(Debug, Clone, PartialEq)]
pub struct EventChannel {
    pub kind: String,
    pub channel_id: String,
    pub updated_at: DateTime<Utc>,
}

impl EventChannel {
    pub fn from_entity(entity: entity::event_channel::Model) -> Self {
        Self {
            kind: entity.kind,
            channel_id: entity.channel_id,
            updated_at: entity.updated_at,
        }
    }
}
