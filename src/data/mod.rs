//! Database repository layer for all ledger and shift entities.
//!
//! This module contains repository structs that handle database
//! operations (CRUD) for each table. Repositories use SeaORM entity
//! models internally and convert to domain models at the infrastructure
//! boundary. They are generic over `ConnectionTrait` so the service
//! layer can run them against either the shared connection or an open
//! transaction.

pub mod balance;
pub mod guild_config;
pub mod history;
pub mod shift;
pub mod shift_settings;

pub use balance::BalanceRepository;
pub use guild_config::GuildConfigRepository;
pub use history::HistoryRepository;
pub use shift::ShiftRepository;
pub use shift_settings::ShiftSettingsRepository;
