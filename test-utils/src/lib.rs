//! Clanboard Test Utils
//!
//! Shared testing utilities for the clanboard crates: a builder for test
//! contexts backed by in-memory SQLite databases, and factories that create
//! entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_record_operations() {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::RenderedRecord)
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
