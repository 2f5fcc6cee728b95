//! Shift factory for creating test shift rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shifts with customizable fields.
///
/// Builds an open shift by default; use `end()` to create a closed one.
pub struct ShiftFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    start_note: Option<String>,
    end_note: Option<String>,
    paused: bool,
    pause_time: Option<DateTime<Utc>>,
    pause_intervals: Vec<(DateTime<Utc>, DateTime<Utc>)>,
}

impl<'a> ShiftFactory<'a> {
    /// Creates a new ShiftFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`
    /// - user_id: auto-incremented unique id
    /// - start: now, end: `None` (open shift)
    /// - not paused, no pause intervals, no notes
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: 1,
            user_id: next_id(),
            start: Utc::now(),
            end: None,
            start_note: None,
            end_note: None,
            paused: false,
            pause_time: None,
            pause_intervals: Vec::new(),
        }
    }

    /// Sets the guild id for the shift.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the user id for the shift.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the start timestamp.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    /// Sets the end timestamp, making the shift closed.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the start note.
    pub fn start_note(mut self, start_note: impl Into<String>) -> Self {
        self.start_note = Some(start_note.into());
        self
    }

    /// Sets the end note.
    pub fn end_note(mut self, end_note: impl Into<String>) -> Self {
        self.end_note = Some(end_note.into());
        self
    }

    /// Marks the shift as currently paused since `pause_time`.
    pub fn paused_since(mut self, pause_time: DateTime<Utc>) -> Self {
        self.paused = true;
        self.pause_time = Some(pause_time);
        self
    }

    /// Sets the closed pause intervals.
    pub fn pause_intervals(mut self, intervals: Vec<(DateTime<Utc>, DateTime<Utc>)>) -> Self {
        self.pause_intervals = intervals;
        self
    }

    /// Builds and inserts the shift row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shift::Model)` - Created shift row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shift::Model, DbErr> {
        let intervals = serde_json::to_string(&self.pause_intervals)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::shift::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            start_note: ActiveValue::Set(self.start_note),
            end_note: ActiveValue::Set(self.end_note),
            paused: ActiveValue::Set(self.paused),
            pause_time: ActiveValue::Set(self.pause_time),
            pause_intervals: ActiveValue::Set(intervals),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open shift for the given pair starting now.
pub async fn create_open_shift(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::shift::Model, DbErr> {
    ShiftFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .build()
        .await
}

/// Creates a closed one-hour shift for the given pair ending now.
pub async fn create_closed_shift(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::shift::Model, DbErr> {
    let end = Utc::now();
    let start = end - chrono::Duration::hours(1);

    ShiftFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .start(start)
        .end(end)
        .build()
        .await
}
