//! Rendered record entity: the stored pointer to the one Discord message
//! currently representing a tracked entity's state.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rendered_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Kind-qualified entity key, e.g. `war:#ABC123` or `stream:somelogin`.
    #[sea_orm(unique)]
    pub entity_name: String,
    pub channel_id: String,
    pub message_id: String,
    pub last_hash: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
