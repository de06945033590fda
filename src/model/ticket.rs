use chrono::{DateTime, Utc};

/// Support ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Claimed,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Claimed => "claimed",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(TicketStatus::Open),
            "claimed" => Some(TicketStatus::Claimed),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub user_id: String,
    pub channel_id: Option<String>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Option<Self> {
        Some(Self {
            id: entity.id,
            user_id: entity.user_id,
            channel_id: entity.channel_id,
            status: TicketStatus::parse(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}
