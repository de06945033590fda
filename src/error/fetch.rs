//! Fetch error taxonomy for the pollers.
//!
//! Transient errors are retried by the next scheduled tick; permanent errors
//! mean the polled entity no longer exists upstream and the reconciler must
//! treat its state as absent.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Likely to succeed on retry: network failure, timeout, 5xx, rate
    /// limit, or an expired token awaiting refresh.
    #[error("transient fetch error (status {status:?})")]
    Transient { status: Option<u16> },

    /// Retrying will not help until upstream state changes; the entity is
    /// gone as far as this poll is concerned.
    #[error("permanent fetch error (status {status})")]
    Permanent { status: u16 },
}

impl FetchError {
    /// Classifies an HTTP status. Only 404 is permanent; everything else,
    /// including auth failures awaiting a token refresh, retries next tick.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FetchError::Permanent { status },
            _ => FetchError::Transient {
                status: Some(status),
            },
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transient { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::from_status(status.as_u16()),
            // Timeout, connect failure, body decode: all retryable.
            None => FetchError::Transient { status: None },
        }
    }
}
