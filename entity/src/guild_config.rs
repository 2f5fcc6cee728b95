//! Guild configuration entity - per-guild ledger settings.
//!
//! `staff_role_ids` holds a JSON-serialized array of role snowflakes.
//! Rows are created on first configuration write and replaced whole on
//! every subsequent write (no partial patch semantics).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub staff_role_ids: String,
    pub points_channel_id: Option<i64>,
    pub daily_bonus: Option<i64>,
    pub weekly_bonus: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
