use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventChannel::Table)
                    .if_not_exists()
                    .col(string(EventChannel::Kind).primary_key())
                    .col(string(EventChannel::ChannelId))
                    .col(timestamp(EventChannel::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventChannel {
    Table,
    Kind,
    ChannelId,
    UpdatedAt,
}
