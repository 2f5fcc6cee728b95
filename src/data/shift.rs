use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository providing database operations for shift rows.
///
/// The shift service owns the state machine; this repository only
/// persists the transitions it has already validated. The open shift
/// for a pair is the row with a NULL end timestamp.
pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new open shift for a pair.
    ///
    /// The caller must have verified that no open shift exists for the
    /// pair; this method does not check.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created shift row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_open(
        &self,
        guild_id: u64,
        user_id: u64,
        start: DateTime<Utc>,
        start_note: Option<String>,
    ) -> Result<entity::shift::Model, DbErr> {
        entity::shift::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
            start: ActiveValue::Set(start),
            end: ActiveValue::Set(None),
            start_note: ActiveValue::Set(start_note),
            end_note: ActiveValue::Set(None),
            paused: ActiveValue::Set(false),
            pause_time: ActiveValue::Set(None),
            pause_intervals: ActiveValue::Set("[]".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the open (non-closed) shift for a pair, if any.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The open shift, paused or not
    /// - `Ok(None)` - No open shift for this pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::GuildId.eq(guild_id as i64))
            .filter(entity::shift::Column::UserId.eq(user_id as i64))
            .filter(entity::shift::Column::End.is_null())
            .one(self.db)
            .await
    }

    /// Marks an open shift as paused since the given time.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated shift row
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_paused(
        &self,
        shift: entity::shift::Model,
        pause_time: DateTime<Utc>,
    ) -> Result<entity::shift::Model, DbErr> {
        let mut active: entity::shift::ActiveModel = shift.into();
        active.paused = ActiveValue::Set(true);
        active.pause_time = ActiveValue::Set(Some(pause_time));

        active.update(self.db).await
    }

    /// Clears the pause state and stores the updated interval list.
    ///
    /// # Arguments
    /// - `shift` - The currently paused shift row
    /// - `pause_intervals` - Closed intervals including the one just
    ///   completed
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated shift row
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_resumed(
        &self,
        shift: entity::shift::Model,
        pause_intervals: &[(DateTime<Utc>, DateTime<Utc>)],
    ) -> Result<entity::shift::Model, DbErr> {
        let intervals = serde_json::to_string(pause_intervals)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize pause intervals: {}", e)))?;

        let mut active: entity::shift::ActiveModel = shift.into();
        active.paused = ActiveValue::Set(false);
        active.pause_time = ActiveValue::Set(None);
        active.pause_intervals = ActiveValue::Set(intervals);

        active.update(self.db).await
    }

    /// Closes a shift, storing the end timestamp, final interval list,
    /// and optional end note.
    ///
    /// # Returns
    /// - `Ok(Model)` - The closed shift row
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(
        &self,
        shift: entity::shift::Model,
        end: DateTime<Utc>,
        end_note: Option<String>,
        pause_intervals: &[(DateTime<Utc>, DateTime<Utc>)],
    ) -> Result<entity::shift::Model, DbErr> {
        let intervals = serde_json::to_string(pause_intervals)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize pause intervals: {}", e)))?;

        let mut active: entity::shift::ActiveModel = shift.into();
        active.end = ActiveValue::Set(Some(end));
        active.end_note = ActiveValue::Set(end_note);
        active.paused = ActiveValue::Set(false);
        active.pause_time = ActiveValue::Set(None);
        active.pause_intervals = ActiveValue::Set(intervals);

        active.update(self.db).await
    }

    /// Gets the most recently closed shifts for a pair, newest first.
    ///
    /// # Returns
    /// - `Ok(shifts)` - Closed shift rows, most recent end first
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_closed_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::GuildId.eq(guild_id as i64))
            .filter(entity::shift::Column::UserId.eq(user_id as i64))
            .filter(entity::shift::Column::End.is_not_null())
            .order_by_desc(entity::shift::Column::End)
            .limit(limit)
            .all(self.db)
            .await
    }
}
