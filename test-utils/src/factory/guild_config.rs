//! Guild config factory for creating test guild configuration rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configs with customizable fields.
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    staff_role_ids: Vec<i64>,
    points_channel_id: Option<i64>,
    daily_bonus: Option<i64>,
    weekly_bonus: Option<i64>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - staff_role_ids: empty
    /// - points_channel_id / daily_bonus / weekly_bonus: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            staff_role_ids: Vec::new(),
            points_channel_id: None,
            daily_bonus: None,
            weekly_bonus: None,
        }
    }

    /// Sets the guild id for the config.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the staff role id set.
    pub fn staff_role_ids(mut self, staff_role_ids: Vec<i64>) -> Self {
        self.staff_role_ids = staff_role_ids;
        self
    }

    /// Sets the announcement channel id.
    pub fn points_channel_id(mut self, points_channel_id: i64) -> Self {
        self.points_channel_id = Some(points_channel_id);
        self
    }

    /// Sets the daily bonus amount.
    pub fn daily_bonus(mut self, daily_bonus: i64) -> Self {
        self.daily_bonus = Some(daily_bonus);
        self
    }

    /// Sets the weekly bonus amount.
    pub fn weekly_bonus(mut self, weekly_bonus: i64) -> Self {
        self.weekly_bonus = Some(weekly_bonus);
        self
    }

    /// Builds and inserts the guild config row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created config row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let roles = serde_json::to_string(&self.staff_role_ids)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            staff_role_ids: ActiveValue::Set(roles),
            points_channel_id: ActiveValue::Set(self.points_channel_id),
            daily_bonus: ActiveValue::Set(self.daily_bonus),
            weekly_bonus: ActiveValue::Set(self.weekly_bonus),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
