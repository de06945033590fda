//! Factories for creating test entities with sensible defaults.

pub mod clan_games;
pub mod helpers;
pub mod rendered_record;
pub mod tracked_entity;
pub mod verified_user;
