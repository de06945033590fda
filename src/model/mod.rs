//! Domain models and operation parameter types.
//!
//! Entity models from the database never leak past the data layer; repositories
//! convert them into these domain models at the boundary.

pub mod clan_games;
pub mod event_channel;
pub mod page_session;
pub mod rendered_record;
pub mod snapshot;
pub mod ticket;
pub mod tracked_entity;
pub mod verified_user;
