//! Domain model for rendered record data operations.
//!
//! A rendered record is the stored pointer to the one Discord message that
//! currently represents a tracked entity's state, together with the content
//! hash of its last rendered payload.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRecord {
    pub id: i32,
    /// Kind-qualified entity key, e.g. `war:#ABC123`.
    pub entity_name: String,
    pub channel_id: String,
    pub message_id: String,
    pub last_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RenderedRecord {
    pub fn from_entity(entity: entity::rendered_record::Model) -> Self {
        Self {
            id: entity.id,
            entity_name: entity.entity_name,
            channel_id: entity.channel_id,
            message_id: entity.message_id,
            last_hash: entity.last_hash,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for the atomic upsert keyed by entity name.
#[derive(Debug, Clone)]
pub struct UpsertRenderedRecordParam {
    pub entity_name: String,
    pub channel_id: String,
    pub message_id: String,
    pub last_hash: String,
}
