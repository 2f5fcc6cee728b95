//! Balance entity - the current point total for one (guild, user) pair.
//!
//! A balance row is a materialized projection of the history stream:
//! `total_earned - total_spent == points` at all times. Rows are created
//! lazily by the first ledger mutation and deleted only by an
//! administrative reset.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "balance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub points: i64,
    pub total_earned: i64,
    pub total_spent: i64,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
