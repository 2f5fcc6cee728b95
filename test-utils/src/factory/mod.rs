//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories assign unique identifiers automatically to avoid
//! collisions between tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let balance = factory::balance::create_balance(&db).await?;
//!     let shift = factory::shift::create_open_shift(&db, 1, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let balance = factory::balance::BalanceFactory::new(&db)
//!     .guild_id(1)
//!     .user_id(42)
//!     .points(100)
//!     .build()
//!     .await?;
//! ```

pub mod balance;
pub mod guild_config;
pub mod helpers;
pub mod history;
pub mod shift;
pub mod shift_settings;

// Re-export commonly used factory functions for concise usage
pub use balance::create_balance;
pub use guild_config::create_guild_config;
pub use history::create_history_entry;
pub use shift::{create_closed_shift, create_open_shift};
pub use shift_settings::create_shift_settings;
