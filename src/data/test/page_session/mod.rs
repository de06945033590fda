use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::data::page_session::PageSessionRepository;
use crate::model::page_session::UpsertPageSessionParam;
use crate::model::tracked_entity::FeatureKind;

mod upsert;

fn session_param(message_id: &str, page: i32) -> UpsertPageSessionParam {
    UpsertPageSessionParam {
        message_id: message_id.to_string(),
        kind: FeatureKind::War,
        entity_name: "#AAA".to_string(),
        page,
    }
}
