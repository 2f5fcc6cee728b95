use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

/// One work session for a (guild, user) pair.
///
/// A shift is open while `end` is `None`; at most one open shift exists
/// per pair. While paused, `paused` is set and `pause_time` holds the
/// start of the in-flight pause; every completed pause is appended to
/// `pause_intervals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub start_note: Option<String>,
    pub end_note: Option<String>,
    pub paused: bool,
    pub pause_time: Option<DateTime<Utc>>,
    pub pause_intervals: Vec<(DateTime<Utc>, DateTime<Utc>)>,
}

impl ShiftRecord {
    /// Converts a SeaORM entity into the domain model.
    ///
    /// Fails only when the serialized pause interval list cannot be
    /// parsed, which indicates the column was modified outside this
    /// crate.
    pub fn from_entity(entity: entity::shift::Model) -> Result<Self, DbErr> {
        let pause_intervals = serde_json::from_str(&entity.pause_intervals)
            .map_err(|e| DbErr::Custom(format!("Malformed pause intervals: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            start: entity.start,
            end: entity.end,
            start_note: entity.start_note,
            end_note: entity.end_note,
            paused: entity.paused,
            pause_time: entity.pause_time,
            pause_intervals,
        })
    }

    /// Total paused time across all completed pause intervals.
    pub fn total_paused(&self) -> Duration {
        self.pause_intervals
            .iter()
            .fold(Duration::zero(), |acc, (start, end)| acc + (*end - *start))
    }
}

/// A closed shift together with its computed active duration:
/// `(end - start)` minus the sum of all pause intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedShift {
    pub record: ShiftRecord,
    pub active_duration: Duration,
}
