use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageSession::Table)
                    .if_not_exists()
                    .col(string(PageSession::MessageId).primary_key())
                    .col(string(PageSession::Kind))
                    .col(string(PageSession::EntityName))
                    .col(integer(PageSession::Page))
                    .col(timestamp(PageSession::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PageSession {
    Table,
    MessageId,
    Kind,
    EntityName,
    Page,
    CreatedAt,
}
