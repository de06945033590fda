use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::tracked_entity::create_tracked_entity};

use crate::data::tracked_entity::TrackedEntityRepository;
use crate::model::tracked_entity::FeatureKind;

mod ensure;
