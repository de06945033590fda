use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::clan_games::{ClanGamesEntry, ClanGamesPeriod};

pub struct ClanGamesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanGamesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recently created clan games period, if any.
    pub async fn current_period(&self) -> Result<Option<ClanGamesPeriod>, DbErr> {
        let row = entity::prelude::ClanGamesPeriod::find()
            .order_by_desc(entity::clan_games_period::Column::Id)
            .one(self.db)
            .await?;

        Ok(row.map(ClanGamesPeriod::from_entity))
    }

    pub async fn create_period(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        target_points: i32,
    ) -> Result<ClanGamesPeriod, DbErr> {
        let row = entity::clan_games_period::ActiveModel {
            id: ActiveValue::NotSet,
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            target_points: ActiveValue::Set(target_points),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ClanGamesPeriod::from_entity(row))
    }

    /// Gets all point entries for a period, highest first.
    pub async fn entries(&self, period_id: i32) -> Result<Vec<ClanGamesEntry>, DbErr> {
        let rows = entity::prelude::ClanGamesEntry::find()
            .filter(entity::clan_games_entry::Column::PeriodId.eq(period_id))
            .order_by_desc(entity::clan_games_entry::Column::Points)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(ClanGamesEntry::from_entity).collect())
    }

    /// Sets a player's points for a period, creating the entry on first
    /// report.
    pub async fn upsert_entry(
        &self,
        period_id: i32,
        player_name: &str,
        points: i32,
    ) -> Result<ClanGamesEntry, DbErr> {
        let existing = entity::prelude::ClanGamesEntry::find()
            .filter(entity::clan_games_entry::Column::PeriodId.eq(period_id))
            .filter(entity::clan_games_entry::Column::PlayerName.eq(player_name))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let row = if let Some(existing) = existing {
            let active = entity::clan_games_entry::ActiveModel {
                id: ActiveValue::Unchanged(existing.id),
                period_id: ActiveValue::Unchanged(existing.period_id),
                player_name: ActiveValue::Unchanged(existing.player_name),
                points: ActiveValue::Set(points),
                updated_at: ActiveValue::Set(now),
            };
            active.update(self.db).await?
        } else {
            entity::clan_games_entry::ActiveModel {
                id: ActiveValue::NotSet,
                period_id: ActiveValue::Set(period_id),
                player_name: ActiveValue::Set(player_name.to_string()),
                points: ActiveValue::Set(points),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        Ok(ClanGamesEntry::from_entity(row))
    }
}
