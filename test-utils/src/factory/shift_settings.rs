//! Shift settings factory for creating test shift settings rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shift settings with customizable fields.
pub struct ShiftSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    log_channel_id: Option<i64>,
    staff_role_ids: Vec<i64>,
}

impl<'a> ShiftSettingsFactory<'a> {
    /// Creates a new ShiftSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - log_channel_id: `None`
    /// - staff_role_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            log_channel_id: None,
            staff_role_ids: Vec::new(),
        }
    }

    /// Sets the guild id for the settings.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the shift log channel id.
    pub fn log_channel_id(mut self, log_channel_id: i64) -> Self {
        self.log_channel_id = Some(log_channel_id);
        self
    }

    /// Sets the eligible staff role id set.
    pub fn staff_role_ids(mut self, staff_role_ids: Vec<i64>) -> Self {
        self.staff_role_ids = staff_role_ids;
        self
    }

    /// Builds and inserts the shift settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shift_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shift_settings::Model, DbErr> {
        let roles = serde_json::to_string(&self.staff_role_ids)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::shift_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            staff_role_ids: ActiveValue::Set(roles),
        }
        .insert(self.db)
        .await
    }
}

/// Creates shift settings with default values.
///
/// Shorthand for `ShiftSettingsFactory::new(db).build().await`.
pub async fn create_shift_settings(
    db: &DatabaseConnection,
) -> Result<entity::shift_settings::Model, DbErr> {
    ShiftSettingsFactory::new(db).build().await
}
