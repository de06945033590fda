//! Clan games administration.
//!
//! The game itself offers no API for clan games progress, so periods and
//! player points are maintained through admin commands and the board renders
//! from this store.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::data::clan_games::ClanGamesRepository;
use crate::error::AppError;
use crate::model::clan_games::{ClanGamesEntry, ClanGamesPeriod};
use crate::presenter::clan_games::MAX_PLAYER_POINTS;

pub struct ClanGamesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanGamesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new clan games period starting now.
    ///
    /// # Returns
    /// - `Ok(ClanGamesPeriod)` - The created period
    /// - `Err(AppError::BadRequest)` - Another period is still running, or
    ///   the inputs are out of range
    pub async fn start_period(
        &self,
        duration_days: i64,
        target_points: i32,
    ) -> Result<ClanGamesPeriod, AppError> {
        if !(1..=14).contains(&duration_days) {
            return Err(AppError::BadRequest(
                "Duration must be between 1 and 14 days.".to_string(),
            ));
        }
        if target_points <= 0 {
            return Err(AppError::BadRequest(
                "Target points must be positive.".to_string(),
            ));
        }

        let repo = ClanGamesRepository::new(self.db);

        let now = Utc::now();
        if let Some(current) = repo.current_period().await? {
            if now <= current.end_time {
                return Err(AppError::BadRequest(format!(
                    "Clan games are already running until <t:{}:R>.",
                    current.end_time.timestamp()
                )));
            }
        }

        let period = repo
            .create_period(now, now + Duration::days(duration_days), target_points)
            .await?;

        Ok(period)
    }

    /// Records a player's points for the running period.
    ///
    /// # Returns
    /// - `Ok(ClanGamesEntry)` - The stored entry
    /// - `Err(AppError::NotFound)` - No period is running
    /// - `Err(AppError::BadRequest)` - Points outside 0..=4000
    pub async fn record_points(
        &self,
        player_name: &str,
        points: i32,
    ) -> Result<ClanGamesEntry, AppError> {
        if !(0..=MAX_PLAYER_POINTS).contains(&points) {
            return Err(AppError::BadRequest(format!(
                "Points must be between 0 and {}.",
                MAX_PLAYER_POINTS
            )));
        }

        let repo = ClanGamesRepository::new(self.db);

        let period = repo
            .current_period()
            .await?
            .filter(|p| Utc::now() <= p.end_time)
            .ok_or_else(|| {
                AppError::NotFound("No clan games period is currently running.".to_string())
            })?;

        let entry = repo.upsert_entry(period.id, player_name, points).await?;
        Ok(entry)
    }
}
