use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_channel")]
pub struct Model {
    /// Feature kind this channel is configured for ("war", "stream",
    /// "membership", "tickets", ...).
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: String,
    pub channel_id: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
