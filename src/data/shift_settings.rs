use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::config::ShiftSettings;

/// Repository providing database operations for per-guild shift
/// settings.
///
/// Same lazily-created, whole-row-replace contract as the guild config
/// repository.
pub struct ShiftSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftSettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the shift settings for a guild, defaulting when absent.
    ///
    /// # Returns
    /// - `Ok(ShiftSettings)` - Stored settings, or the default
    /// - `Err(DbErr)` - Database error, or a malformed stored role set
    pub async fn get(&self, guild_id: u64) -> Result<ShiftSettings, DbErr> {
        let found = entity::prelude::ShiftSettings::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        match found {
            Some(entity) => {
                let staff_role_ids: Vec<u64> = serde_json::from_str(&entity.staff_role_ids)
                    .map_err(|e| DbErr::Custom(format!("Malformed staff role set: {}", e)))?;

                Ok(ShiftSettings {
                    log_channel_id: entity.log_channel_id.map(|id| id as u64),
                    staff_role_ids,
                })
            }
            None => Ok(ShiftSettings::default()),
        }
    }

    /// Replaces the shift settings row for a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Settings stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn put(&self, guild_id: u64, settings: &ShiftSettings) -> Result<(), DbErr> {
        let roles = serde_json::to_string(&settings.staff_role_ids)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize staff role set: {}", e)))?;

        entity::prelude::ShiftSettings::insert(entity::shift_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            log_channel_id: ActiveValue::Set(settings.log_channel_id.map(|id| id as i64)),
            staff_role_ids: ActiveValue::Set(roles),
        })
        .on_conflict(
            OnConflict::column(entity::shift_settings::Column::GuildId)
                .update_columns([
                    entity::shift_settings::Column::LogChannelId,
                    entity::shift_settings::Column::StaffRoleIds,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
