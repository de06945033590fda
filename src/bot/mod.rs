//! Discord bot integration: gateway startup, event handling, slash commands
//! and component interactions.
//!
//! The bot runs in its own tokio task next to the scheduler; both share the
//! same HTTP client for message operations.

pub mod commands;
pub mod handler;
pub mod interaction;
pub mod start;
