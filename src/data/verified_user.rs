use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::verified_user::{UpsertVerifiedUserParam, VerifiedUser};

pub struct VerifiedUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerifiedUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<VerifiedUser>, DbErr> {
        let rows = entity::prelude::VerifiedUser::find()
            .order_by_asc(entity::verified_user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(VerifiedUser::from_entity).collect())
    }

    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<VerifiedUser>, DbErr> {
        let row = entity::prelude::VerifiedUser::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(VerifiedUser::from_entity))
    }

    pub async fn find_by_player_tag(
        &self,
        player_tag: &str,
    ) -> Result<Option<VerifiedUser>, DbErr> {
        let row = entity::prelude::VerifiedUser::find()
            .filter(entity::verified_user::Column::PlayerTag.eq(player_tag))
            .one(self.db)
            .await?;

        Ok(row.map(VerifiedUser::from_entity))
    }

    /// Creates or refreshes a verification record. Re-verifying resets the
    /// warn counter since the player is demonstrably in the clan.
    pub async fn upsert(&self, param: UpsertVerifiedUserParam) -> Result<VerifiedUser, DbErr> {
        let now = Utc::now();

        let active = entity::verified_user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.clone()),
            player_tag: ActiveValue::Set(param.player_tag),
            player_name: ActiveValue::Set(param.player_name),
            clan_role: ActiveValue::Set(param.clan_role),
            warn_hours: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::VerifiedUser::insert(active)
            .on_conflict(
                OnConflict::column(entity::verified_user::Column::DiscordId)
                    .update_columns([
                        entity::verified_user::Column::PlayerTag,
                        entity::verified_user::Column::PlayerName,
                        entity::verified_user::Column::ClanRole,
                        entity::verified_user::Column::WarnHours,
                        entity::verified_user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.find_by_discord_id(&param.discord_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("verified user missing after upsert".to_string()))
    }

    /// Updates the departed-from-clan warn counter.
    pub async fn set_warn_hours(&self, discord_id: &str, warn_hours: i32) -> Result<(), DbErr> {
        let mut active: entity::verified_user::ActiveModel = Default::default();
        active.discord_id = ActiveValue::Unchanged(discord_id.to_string());
        active.warn_hours = ActiveValue::Set(warn_hours);
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::VerifiedUser::update_many()
            .set(active)
            .filter(entity::verified_user::Column::DiscordId.eq(discord_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_discord_id(&self, discord_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::VerifiedUser::delete_many()
            .filter(entity::verified_user::Column::DiscordId.eq(discord_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
