use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::data::rendered_record::RenderedRecordRepository;
use crate::model::rendered_record::UpsertRenderedRecordParam;

mod delete;
mod get;
mod upsert;

fn upsert_param(entity_name: &str, message_id: &str) -> UpsertRenderedRecordParam {
    UpsertRenderedRecordParam {
        entity_name: entity_name.to_string(),
        channel_id: "42".to_string(),
        message_id: message_id.to_string(),
        last_hash: format!("hash-of-{}", message_id),
    }
}
