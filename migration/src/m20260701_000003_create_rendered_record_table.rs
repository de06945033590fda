use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RenderedRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(RenderedRecord::Id))
                    .col(string(RenderedRecord::EntityName))
                    .col(string(RenderedRecord::ChannelId))
                    .col(string(RenderedRecord::MessageId))
                    .col(string(RenderedRecord::LastHash))
                    .col(timestamp(RenderedRecord::CreatedAt))
                    .col(timestamp(RenderedRecord::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // The at-most-one-message invariant: a single record per entity,
        // and the target of the atomic upsert-on-conflict.
        manager
            .create_index(
                Index::create()
                    .name("idx_rendered_record_entity_name")
                    .table(RenderedRecord::Table)
                    .col(RenderedRecord::EntityName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rendered_record_entity_name")
                    .table(RenderedRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RenderedRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RenderedRecord {
    Table,
    Id,
    EntityName,
    ChannelId,
    MessageId,
    LastHash,
    CreatedAt,
    UpdatedAt,
}
