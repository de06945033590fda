use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::tracked_entity::{FeatureKind, TrackedEntity};

pub struct TrackedEntityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackedEntityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tracked entities of a feature kind, oldest first.
    ///
    /// Rows with an unknown kind string are skipped.
    pub async fn get_by_kind(&self, kind: FeatureKind) -> Result<Vec<TrackedEntity>, DbErr> {
        let rows = entity::prelude::TrackedEntity::find()
            .filter(entity::tracked_entity::Column::Kind.eq(kind.as_str()))
            .order_by_asc(entity::tracked_entity::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(TrackedEntity::from_entity).collect())
    }

    pub async fn find(
        &self,
        kind: FeatureKind,
        name: &str,
    ) -> Result<Option<TrackedEntity>, DbErr> {
        let row = entity::prelude::TrackedEntity::find()
            .filter(entity::tracked_entity::Column::Kind.eq(kind.as_str()))
            .filter(entity::tracked_entity::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(row.and_then(TrackedEntity::from_entity))
    }

    /// Creates a tracked entity. Callers are expected to check `find` first;
    /// the unique (kind, name) index rejects duplicates.
    pub async fn create(&self, kind: FeatureKind, name: &str) -> Result<TrackedEntity, DbErr> {
        let row = entity::tracked_entity::ActiveModel {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(kind.as_str().to_string()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        TrackedEntity::from_entity(row)
            .ok_or_else(|| DbErr::Custom("tracked entity kind round-trip failed".to_string()))
    }

    /// Creates the entity if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(true)` - A new entity was created
    /// - `Ok(false)` - The entity already existed
    pub async fn ensure(&self, kind: FeatureKind, name: &str) -> Result<bool, DbErr> {
        if self.find(kind, name).await?.is_some() {
            return Ok(false);
        }

        self.create(kind, name).await?;
        Ok(true)
    }

    /// Removes a tracked entity.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    pub async fn delete(&self, kind: FeatureKind, name: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::TrackedEntity::delete_many()
            .filter(entity::tracked_entity::Column::Kind.eq(kind.as_str()))
            .filter(entity::tracked_entity::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
