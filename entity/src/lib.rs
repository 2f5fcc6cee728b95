//! SeaORM entity models for the CodeVerse ledger database.
//!
//! One module per table: point balances, the append-only point history,
//! per-guild ledger configuration, shift records, and per-guild shift
//! settings. Repositories in the main crate work with these models;
//! everything else consumes the plain structs in the main crate's
//! `model` module.

pub mod balance;
pub mod guild_config;
pub mod history;
pub mod prelude;
pub mod shift;
pub mod shift_settings;
