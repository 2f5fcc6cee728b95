//! Service layer for ledger and shift business logic.
//!
//! Services sit between command handlers and the repository layer. They
//! are responsible for:
//!
//! - **Invariants**: keeping every balance consistent with its history
//!   stream and every shift inside its state machine
//! - **Serialization**: read-modify-write sequences for a single
//!   (guild, user) pair run under a per-pair async lock, so concurrent
//!   command invocations cannot lose updates
//! - **Atomicity**: the history append and balance replace of one
//!   mutation commit in a single database transaction
//!
//! Services are cheap to construct per invocation; the lock maps are the
//! only shared state and are passed in by the embedding application.

pub mod ledger;
pub mod locks;
pub mod shift;

pub use ledger::LedgerService;
pub use locks::PairLocks;
pub use shift::ShiftService;
