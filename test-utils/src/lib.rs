//! CodeVerse Ledger Test Utils
//!
//! Shared testing utilities for the ledger crates. Provides a builder
//! pattern for creating test contexts with in-memory SQLite databases
//! and per-entity factories for seeding test data.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Balance;
//!
//! #[tokio::test]
//! async fn test_balance_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Balance)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
