use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::config::GuildConfig;

/// Repository providing database operations for per-guild ledger
/// configuration.
///
/// Rows are created lazily on first write and replaced whole on every
/// subsequent write. Role sets are stored as a JSON array in a TEXT
/// column.
pub struct GuildConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the configuration for a guild.
    ///
    /// Returns the default configuration (empty role set, no channel,
    /// no bonuses) when no row exists; missing guilds are never an
    /// error.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Stored configuration, or the default
    /// - `Err(DbErr)` - Database error, or a malformed stored role set
    pub async fn get(&self, guild_id: u64) -> Result<GuildConfig, DbErr> {
        let found = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        match found {
            Some(entity) => {
                let staff_role_ids: Vec<u64> = serde_json::from_str(&entity.staff_role_ids)
                    .map_err(|e| DbErr::Custom(format!("Malformed staff role set: {}", e)))?;

                Ok(GuildConfig {
                    staff_role_ids,
                    points_channel_id: entity.points_channel_id.map(|id| id as u64),
                    daily_bonus: entity.daily_bonus,
                    weekly_bonus: entity.weekly_bonus,
                })
            }
            None => Ok(GuildConfig::default()),
        }
    }

    /// Replaces the configuration row for a guild.
    ///
    /// Inserts the row if missing, otherwise overwrites every column;
    /// there are no partial patch semantics.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn put(&self, guild_id: u64, config: &GuildConfig) -> Result<(), DbErr> {
        let roles = serde_json::to_string(&config.staff_role_ids)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize staff role set: {}", e)))?;

        entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            staff_role_ids: ActiveValue::Set(roles),
            points_channel_id: ActiveValue::Set(config.points_channel_id.map(|id| id as i64)),
            daily_bonus: ActiveValue::Set(config.daily_bonus),
            weekly_bonus: ActiveValue::Set(config.weekly_bonus),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::StaffRoleIds,
                    entity::guild_config::Column::PointsChannelId,
                    entity::guild_config::Column::DailyBonus,
                    entity::guild_config::Column::WeeklyBonus,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
