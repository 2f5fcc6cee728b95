//! Error types for ledger and shift operations.
//!
//! `LedgerError` is the single error type returned across the crate's
//! public surface. State-machine violations and invalid input are typed
//! variants the calling command handler translates into user-facing
//! messages; `Storage` is the only retryable kind. Missing balances and
//! configs default instead of erroring, and missing shifts surface as
//! `None` on reads.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A zero delta was supplied to an `add` or `subtract` operation.
    ///
    /// Zero-point changes would append meaningless history rows, so they
    /// are rejected before anything is written.
    #[error("Point amount must be non-zero, got {0}")]
    InvalidAmount(i64),

    /// An open or paused shift already exists for this (guild, user) pair.
    #[error("An open shift already exists for this user")]
    AlreadyOpen,

    /// The operation requires an open, unpaused shift.
    #[error("No open shift exists for this user")]
    NotOpen,

    /// The operation requires a paused shift.
    #[error("The current shift is not paused")]
    NotPaused,

    /// A malformed role or channel identifier was supplied to a
    /// configuration write.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Identity reassignment would collide with existing ledger rows.
    #[error("User {user} already has ledger entries in guild {guild}")]
    IdentityConflict { guild: u64, user: u64 },

    /// Database operation error from SeaORM.
    ///
    /// The only retryable variant; the ledger service retries the
    /// enclosing transaction once before propagating it.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}

impl LedgerError {
    /// Whether the failed operation may be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Storage(_))
    }
}
