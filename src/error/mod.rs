//! Application error types.
//!
//! `AppError` is the top-level error aggregating infrastructure failures and
//! domain misses. The fetch and chat taxonomies get their own enums so
//! callers can branch on kind (transient vs. permanent, not-found vs.
//! permission) instead of catching broadly.

pub mod chat;
pub mod config;
pub mod fetch;

use thiserror::Error;

use crate::error::{chat::ChatError, config::ConfigError, fetch::FetchError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Serenity errors are
/// boxed because the type is large and would bloat every variant otherwise.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    #[error(transparent)]
    FetchErr(#[from] FetchError),

    #[error(transparent)]
    ChatErr(#[from] ChatError),

    /// A referenced resource does not exist (tracked entity, channel
    /// mapping, verification record, ...).
    #[error("{0}")]
    NotFound(String),

    /// Invalid input from a command or interaction.
    #[error("{0}")]
    BadRequest(String),

    /// Invariant violation or unparseable stored data.
    #[error("{0}")]
    InternalError(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
