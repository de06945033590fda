use chrono::{DateTime, Utc};

use crate::model::tracked_entity::FeatureKind;

/// Per-message pagination state for interactive views. Short-lived; stale
/// sessions are swept by the cleanup job.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSession {
    pub message_id: String,
    pub kind: FeatureKind,
    pub entity_name: String,
    pub page: i32,
    pub created_at: DateTime<Utc>,
}

impl PageSession {
    pub fn from_entity(entity: entity::page_session::Model) -> Option<Self> {
        Some(Self {
            message_id: entity.message_id,
            kind: FeatureKind::parse(&entity.kind)?,
            entity_name: entity.entity_name,
            page: entity.page,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for storing or moving a paginated view.
#[derive(Debug, Clone)]
pub struct UpsertPageSessionParam {
    pub message_id: String,
    pub kind: FeatureKind,
    pub entity_name: String,
    pub page: i32,
}
