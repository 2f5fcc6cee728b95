pub use super::balance::Entity as Balance;
pub use super::guild_config::Entity as GuildConfig;
pub use super::history::Entity as History;
pub use super::shift::Entity as Shift;
pub use super::shift_settings::Entity as ShiftSettings;
