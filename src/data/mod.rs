//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer boundary clean. All queries, inserts, updates, and
//! deletes go through these repositories.

pub mod clan_games;
pub mod event_channel;
pub mod page_session;
pub mod rendered_record;
pub mod ticket;
pub mod tracked_entity;
pub mod verified_user;

#[cfg(test)]
mod test;
