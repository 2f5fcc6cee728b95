//! Shift entity - one work session for a (guild, user) pair.
//!
//! A shift is open while `end` is NULL; at most one open row may exist
//! per pair. `pause_time` is set while the shift is paused, and every
//! completed pause is appended to `pause_intervals` as a JSON array of
//! (start, end) timestamp pairs.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub user_id: i64,
    pub start: DateTimeUtc,
    pub end: Option<DateTimeUtc>,
    pub start_note: Option<String>,
    pub end_note: Option<String>,
    pub paused: bool,
    pub pause_time: Option<DateTimeUtc>,
    pub pause_intervals: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
