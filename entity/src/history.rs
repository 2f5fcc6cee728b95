//! History entity - one immutable row per ledger mutation.
//!
//! Rows are append-only: never updated or deleted outside of
//! administrative identity reassignment. `moderator_id` 0 marks a
//! system-caused change. `action_type` stores the string form of
//! `ActionType` (`add`, `subtract`, `set`, `reset`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub user_id: i64,
    pub moderator_id: i64,
    pub points_change: i64,
    pub reason: Option<String>,
    pub action_type: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
