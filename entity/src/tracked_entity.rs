use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tracked_entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Feature kind string ("war", "war-league", "clan-games", "stream").
    pub kind: String,
    /// Stable external identifier: a clan tag or a Twitch login.
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
