use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanGamesPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanGamesPeriod::Id))
                    .col(timestamp(ClanGamesPeriod::StartTime))
                    .col(timestamp(ClanGamesPeriod::EndTime))
                    .col(integer(ClanGamesPeriod::TargetPoints))
                    .col(timestamp(ClanGamesPeriod::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClanGamesEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanGamesEntry::Id))
                    .col(integer(ClanGamesEntry::PeriodId))
                    .col(string(ClanGamesEntry::PlayerName))
                    .col(integer(ClanGamesEntry::Points))
                    .col(timestamp(ClanGamesEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clan_games_entry_period_player")
                    .table(ClanGamesEntry::Table)
                    .col(ClanGamesEntry::PeriodId)
                    .col(ClanGamesEntry::PlayerName)
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
                    .name("idx_clan_games_entry_period_player")
                    .table(ClanGamesEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClanGamesEntry::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClanGamesPeriod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClanGamesPeriod {
    Table,
    Id,
    StartTime,
    EndTime,
    TargetPoints,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClanGamesEntry {
    Table,
    Id,
    PeriodId,
    PlayerName,
    Points,
    UpdatedAt,
}
