use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::data::event_channel::EventChannelRepository;

mod upsert;
