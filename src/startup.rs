use sea_orm::DatabaseConnection;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::data::tracked_entity::TrackedEntityRepository;
use crate::error::AppError;
use crate::model::tracked_entity::FeatureKind;

/// Bound on every external fetch so a stalled API cannot block a scheduler
/// tick indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the SQLite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Shared HTTP client for the external APIs. Redirects are disabled and a
/// hard timeout is applied; a timeout surfaces as a transient fetch error.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Makes sure the configured clan is tracked for every clan-scoped feature
/// kind. Stream entities are managed at runtime via `/streamer`.
pub async fn ensure_tracked_clan(db: &DatabaseConnection, clan_tag: &str) -> Result<(), AppError> {
    let repo = TrackedEntityRepository::new(db);

    for kind in [
        FeatureKind::War,
        FeatureKind::WarLeague,
        FeatureKind::ClanGames,
    ] {
        if repo.ensure(kind, clan_tag).await? {
            info!("now tracking {} for clan {}", kind, clan_tag);
        }
    }

    Ok(())
}
