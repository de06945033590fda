use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerifiedUser::Table)
                    .if_not_exists()
                    .col(string(VerifiedUser::DiscordId).primary_key())
                    .col(string(VerifiedUser::PlayerTag))
                    .col(string(VerifiedUser::PlayerName))
                    .col(string(VerifiedUser::ClanRole))
                    .col(integer(VerifiedUser::WarnHours))
                    .col(timestamp(VerifiedUser::CreatedAt))
                    .col(timestamp(VerifiedUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_verified_user_player_tag")
                    .table(VerifiedUser::Table)
                    .col(VerifiedUser::PlayerTag)
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
                    .name("idx_verified_user_player_tag")
                    .table(VerifiedUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VerifiedUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VerifiedUser {
    Table,
    DiscordId,
    PlayerTag,
    PlayerName,
    ClanRole,
    WarnHours,
    CreatedAt,
    UpdatedAt,
}
