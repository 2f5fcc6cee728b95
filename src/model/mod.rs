//! Domain models returned across the crate's public surface.
//!
//! These are plain data structs free of storage and presentation
//! concerns: repositories convert SeaORM entities into them at the
//! infrastructure boundary, and command handlers render them into
//! user-facing messages however they like.

pub mod config;
pub mod ledger;
pub mod shift;
