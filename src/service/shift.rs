use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{ShiftRepository, ShiftSettingsRepository},
    error::LedgerError,
    model::{
        config::ShiftSettings,
        shift::{ClosedShift, ShiftRecord},
    },
    service::locks::PairLocks,
};

/// Shift state machine per (guild, user) pair.
///
/// States: no open shift, open, open+paused. A shift closes from either
/// open state and closing is terminal. Transitions for one pair run
/// under the pair's lock so concurrent commands cannot open two shifts
/// or append the same pause interval twice.
pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
    locks: Arc<PairLocks>,
}

impl<'a> ShiftService<'a> {
    /// Creates a new ShiftService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Shared per-pair lock map owned by the embedding
    ///   application
    pub fn new(db: &'a DatabaseConnection, locks: Arc<PairLocks>) -> Self {
        Self { db, locks }
    }

    /// Starts a new shift for a pair.
    ///
    /// # Returns
    /// - `Ok(ShiftRecord)` - The new open shift
    /// - `Err(LedgerError::AlreadyOpen)` - An open or paused shift exists
    /// - `Err(LedgerError::Storage)` - Database error
    pub async fn start(
        &self,
        guild_id: u64,
        user_id: u64,
        note: Option<String>,
    ) -> Result<ShiftRecord, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let repo = ShiftRepository::new(self.db);

        if repo.find_open(guild_id, user_id).await?.is_some() {
            return Err(LedgerError::AlreadyOpen);
        }

        let shift = repo.create_open(guild_id, user_id, Utc::now(), note).await?;

        Ok(ShiftRecord::from_entity(shift)?)
    }

    /// Pauses the open shift for a pair.
    ///
    /// # Returns
    /// - `Ok(ShiftRecord)` - The paused shift
    /// - `Err(LedgerError::NotOpen)` - No open shift, or already paused
    /// - `Err(LedgerError::Storage)` - Database error
    pub async fn pause(&self, guild_id: u64, user_id: u64) -> Result<ShiftRecord, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let repo = ShiftRepository::new(self.db);

        let shift = repo
            .find_open(guild_id, user_id)
            .await?
            .ok_or(LedgerError::NotOpen)?;

        if shift.paused {
            return Err(LedgerError::NotOpen);
        }

        let shift = repo.mark_paused(shift, Utc::now()).await?;

        Ok(ShiftRecord::from_entity(shift)?)
    }

    /// Resumes the paused shift for a pair, closing the in-flight pause
    /// interval.
    ///
    /// # Returns
    /// - `Ok(ShiftRecord)` - The resumed shift
    /// - `Err(LedgerError::NotPaused)` - No open shift, or not paused
    /// - `Err(LedgerError::Storage)` - Database error
    pub async fn resume(&self, guild_id: u64, user_id: u64) -> Result<ShiftRecord, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let repo = ShiftRepository::new(self.db);

        let shift = repo
            .find_open(guild_id, user_id)
            .await?
            .ok_or(LedgerError::NotPaused)?;

        if !shift.paused {
            return Err(LedgerError::NotPaused);
        }

        let record = ShiftRecord::from_entity(shift.clone())?;
        let pause_start = record.pause_time.ok_or(LedgerError::NotPaused)?;

        let mut intervals = record.pause_intervals;
        intervals.push((pause_start, Utc::now()));

        let shift = repo.mark_resumed(shift, &intervals).await?;

        Ok(ShiftRecord::from_entity(shift)?)
    }

    /// Ends the open shift for a pair, paused or not.
    ///
    /// An in-flight pause is closed at the end time first, so the final
    /// interval list accounts for all paused time. Returns the closed
    /// record with its active duration:
    /// `(end - start) - sum(pause intervals)`.
    ///
    /// # Returns
    /// - `Ok(ClosedShift)` - The closed shift and its active duration
    /// - `Err(LedgerError::NotOpen)` - No open shift for this pair
    /// - `Err(LedgerError::Storage)` - Database error
    pub async fn end(
        &self,
        guild_id: u64,
        user_id: u64,
        note: Option<String>,
    ) -> Result<ClosedShift, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let repo = ShiftRepository::new(self.db);

        let shift = repo
            .find_open(guild_id, user_id)
            .await?
            .ok_or(LedgerError::NotOpen)?;

        let record = ShiftRecord::from_entity(shift.clone())?;
        let end = Utc::now();

        let mut intervals = record.pause_intervals;
        if record.paused {
            if let Some(pause_start) = record.pause_time {
                intervals.push((pause_start, end));
            }
        }

        let shift = repo.close(shift, end, note, &intervals).await?;
        let record = ShiftRecord::from_entity(shift)?;

        let active_duration = (end - record.start) - record.total_paused();

        Ok(ClosedShift {
            record,
            active_duration,
        })
    }

    /// Gets the current non-closed shift for a pair, if any.
    pub async fn active(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<ShiftRecord>, LedgerError> {
        let shift = ShiftRepository::new(self.db)
            .find_open(guild_id, user_id)
            .await?;

        match shift {
            Some(shift) => Ok(Some(ShiftRecord::from_entity(shift)?)),
            None => Ok(None),
        }
    }

    /// Gets the most recently closed shifts for a pair, newest first.
    pub async fn recent(
        &self,
        guild_id: u64,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<ShiftRecord>, LedgerError> {
        let shifts = ShiftRepository::new(self.db)
            .list_closed_for_user(guild_id, user_id, limit)
            .await?;

        shifts
            .into_iter()
            .map(|s| ShiftRecord::from_entity(s).map_err(LedgerError::Storage))
            .collect()
    }

    /// Gets a guild's shift settings, defaulting when absent.
    pub async fn get_settings(&self, guild_id: u64) -> Result<ShiftSettings, LedgerError> {
        Ok(ShiftSettingsRepository::new(self.db).get(guild_id).await?)
    }

    /// Replaces a guild's shift settings.
    ///
    /// # Returns
    /// - `Ok(())` - Settings stored
    /// - `Err(LedgerError::ConfigInvalid)` - Zero role or channel id
    /// - `Err(LedgerError::Storage)` - Database error during the write
    pub async fn put_settings(
        &self,
        guild_id: u64,
        settings: &ShiftSettings,
    ) -> Result<(), LedgerError> {
        if settings.staff_role_ids.iter().any(|&id| id == 0) {
            return Err(LedgerError::ConfigInvalid(
                "Staff role ids must be non-zero".to_string(),
            ));
        }
        if settings.log_channel_id == Some(0) {
            return Err(LedgerError::ConfigInvalid(
                "Log channel id must be non-zero".to_string(),
            ));
        }

        ShiftSettingsRepository::new(self.db).put(guild_id, settings).await?;

        Ok(())
    }
}
