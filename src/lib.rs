//! CodeVerse Ledger
//!
//! Persistent point-ledger, per-guild configuration, and shift-tracking
//! core for the CodeVerse community bot. Command handlers, schedulers,
//! and the Discord client are collaborators that link this crate and
//! translate its plain data into user-facing messages.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - `LedgerService` and `ShiftService`,
//!   the only writers; enforce invariants and serialize mutations per
//!   (guild, user) pair
//! - **Data Layer** (`data/`) - Repository structs over SeaORM entities
//! - **Model Layer** (`model/`) - Plain structs returned to callers, free
//!   of storage and UI concerns
//! - **Error Layer** (`error/`) - `LedgerError` taxonomy
//!
//! Supporting modules: `config` (environment configuration) and `startup`
//! (database connection plus idempotent schema migrations).
//!
//! # Usage
//!
//! The embedding binary connects once at startup and shares the lock maps
//! across handler invocations:
//!
//! ```rust,ignore
//! use codeverse_ledger::{config::Config, service::PairLocks, startup};
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let db = startup::connect_to_database(&config).await?;
//! let ledger_locks = Arc::new(PairLocks::new());
//!
//! // Per command invocation:
//! let ledger = codeverse_ledger::service::LedgerService::new(&db, ledger_locks.clone());
//! let balance = ledger.apply_delta(guild, user, moderator, 5, None, ActionType::Add).await?;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
