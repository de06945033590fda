use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verified_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    #[sea_orm(unique)]
    pub player_tag: String,
    pub player_name: String,
    /// In-game clan role as reported by the API ("leader", "coLeader",
    /// "admin", "member").
    pub clan_role: String,
    /// Consecutive hours the player has been observed outside the clan.
    pub warn_hours: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
