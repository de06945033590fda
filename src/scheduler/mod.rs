//! Timer-driven polling.
//!
//! One independent periodic job per feature kind plus the membership sweep
//! and the page-session cleanup. Jobs are not coordinated with each other;
//! they touch disjoint store keys, and per-entity ordering is enforced by
//! the reconciler's locks.

use chrono::{Duration, Utc};
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::data::page_session::PageSessionRepository;
use crate::error::AppError;
use crate::model::tracked_entity::FeatureKind;
use crate::reconcile::{chat::DiscordChat, ReconcileAction};
use crate::service::{membership::MembershipService, sync::EntitySyncService};
use crate::state::AppState;

/// Stream status flips quickly; check every minute like the original did.
const STREAM_SCHEDULE: &str = "0 * * * * *";
/// War stars move slower; every ten minutes keeps the board fresh enough.
const WAR_SCHEDULE: &str = "30 */10 * * * *";
const WAR_LEAGUE_SCHEDULE: &str = "0 5 * * * *";
const CLAN_GAMES_SCHEDULE: &str = "0 20 * * * *";
const MEMBERSHIP_SCHEDULE: &str = "0 40 * * * *";
const CLEANUP_SCHEDULE: &str = "0 50 * * * *";

/// Paginated views stop responding after this long.
const PAGE_SESSION_TTL_HOURS: i64 = 1;

/// Starts all periodic jobs. Returns once the scheduler is running; the
/// jobs themselves live in background tasks.
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let boards: [(FeatureKind, &str); 4] = [
        (FeatureKind::Stream, STREAM_SCHEDULE),
        (FeatureKind::War, WAR_SCHEDULE),
        (FeatureKind::WarLeague, WAR_LEAGUE_SCHEDULE),
        (FeatureKind::ClanGames, CLAN_GAMES_SCHEDULE),
    ];

    for (kind, schedule) in boards {
        let job_state = state.clone();
        let job_http = discord_http.clone();

        let job = Job::new_async(schedule, move |_uuid, _lock| {
            let state = job_state.clone();
            let http = job_http.clone();

            Box::pin(async move {
                if let Err(e) = run_board_tick(&state, http, kind).await {
                    error!("{} tick failed: {}", kind, e);
                }
            })
        })?;

        scheduler.add(job).await?;
    }

    let job_state = state.clone();
    let job_http = discord_http.clone();
    let membership_job = Job::new_async(MEMBERSHIP_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            let service = MembershipService::new(
                &state.db,
                &state.coc,
                http,
                state.config.discord_guild_id,
                &state.config.clan_tag,
            );
            if let Err(e) = service.run().await {
                error!("membership tick failed: {}", e);
            }
        })
    })?;
    scheduler.add(membership_job).await?;

    let job_state = state.clone();
    let cleanup_job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            let cutoff = Utc::now() - Duration::hours(PAGE_SESSION_TTL_HOURS);
            match PageSessionRepository::new(&state.db)
                .delete_older_than(cutoff)
                .await
            {
                Ok(0) => {}
                Ok(removed) => info!("cleaned up {} stale page sessions", removed),
                Err(e) => error!("page session cleanup failed: {}", e),
            }
        })
    })?;
    scheduler.add(cleanup_job).await?;

    scheduler.start().await?;

    info!("Scheduler started");
    Ok(())
}

async fn run_board_tick(
    state: &AppState,
    http: Arc<Http>,
    kind: FeatureKind,
) -> Result<(), AppError> {
    let chat = DiscordChat::new(http);
    let fetchers = state.fetchers();

    let results = EntitySyncService::new(&state.db, &chat, &state.locks, &fetchers)
        .sync_kind(kind)
        .await?;

    for (name, action) in results {
        if !matches!(action, ReconcileAction::Unchanged | ReconcileAction::Noop) {
            info!("{} board for {}: {}", kind, name, action);
        }
    }

    Ok(())
}
