//! History factory for creating test history entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test history entries with customizable fields.
pub struct HistoryFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    moderator_id: i64,
    points_change: i64,
    reason: Option<String>,
    action_type: String,
    timestamp: DateTime<Utc>,
}

impl<'a> HistoryFactory<'a> {
    /// Creates a new HistoryFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`
    /// - user_id: auto-incremented unique id
    /// - moderator_id: `0` (system sentinel)
    /// - points_change: `1`
    /// - reason: `None`
    /// - action_type: `"add"`
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: 1,
            user_id: next_id(),
            moderator_id: 0,
            points_change: 1,
            reason: None,
            action_type: "add".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Sets the guild id for the entry.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the user id for the entry.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the moderator id for the entry.
    pub fn moderator_id(mut self, moderator_id: i64) -> Self {
        self.moderator_id = moderator_id;
        self
    }

    /// Sets the signed point change.
    pub fn points_change(mut self, points_change: i64) -> Self {
        self.points_change = points_change;
        self
    }

    /// Sets the free-text reason.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the action type string (`add`, `subtract`, `set`, `reset`).
    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = action_type.into();
        self
    }

    /// Sets the entry timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the history entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::history::Model)` - Created history entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::history::Model, DbErr> {
        entity::history::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            moderator_id: ActiveValue::Set(self.moderator_id),
            points_change: ActiveValue::Set(self.points_change),
            reason: ActiveValue::Set(self.reason),
            action_type: ActiveValue::Set(self.action_type),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a history entry with default values.
///
/// Shorthand for `HistoryFactory::new(db).build().await`.
pub async fn create_history_entry(
    db: &DatabaseConnection,
) -> Result<entity::history::Model, DbErr> {
    HistoryFactory::new(db).build().await
}
