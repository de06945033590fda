use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "page_session")]
pub struct Model {
    /// Discord message ID the paginated view is attached to.
    #[sea_orm(primary_key, auto_increment = false)]
    pub message_id: String,
    pub kind: String,
    pub entity_name: String,
    pub page: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
