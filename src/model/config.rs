use serde::{Deserialize, Serialize};

/// Per-guild ledger configuration.
///
/// Created lazily on first write; every write replaces the whole row.
/// A guild with no stored configuration gets the default (empty role
/// set, no channel, no bonuses).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildConfig {
    /// Role identifiers authorized as staff. Insertion order is kept but
    /// carries no meaning.
    pub staff_role_ids: Vec<u64>,
    /// Channel for point-related announcements, if configured.
    pub points_channel_id: Option<u64>,
    /// Automatic daily bonus amount, if configured.
    pub daily_bonus: Option<i64>,
    /// Automatic weekly bonus amount, if configured.
    pub weekly_bonus: Option<i64>,
}

/// Per-guild shift tracking configuration.
///
/// Same lazily-created, whole-row-replace contract as [`GuildConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSettings {
    /// Channel where shift logs are posted, if configured.
    pub log_channel_id: Option<u64>,
    /// Role identifiers eligible to track shifts.
    pub staff_role_ids: Vec<u64>,
}
