use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::ledger::ActionType;

/// Totals folded from a (guild, user) history stream, in the same shape
/// the balance row stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryTotals {
    pub points: i64,
    pub total_earned: i64,
    pub total_spent: i64,
}

/// Repository providing database operations for the append-only history
/// stream.
///
/// Entries are immutable once written; the only mutation this repository
/// exposes is administrative identity reassignment.
pub struct HistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one immutable history entry.
    ///
    /// # Arguments
    /// - `guild_id` / `user_id` - Pair the change applies to
    /// - `moderator_id` - Actor who caused the change; 0 for system
    /// - `points_change` - Signed delta recorded for the mutation
    /// - `reason` - Optional free-text reason
    /// - `action_type` - Kind of mutation being recorded
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted entry with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        points_change: i64,
        reason: Option<String>,
        action_type: ActionType,
    ) -> Result<entity::history::Model, DbErr> {
        entity::history::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
            moderator_id: ActiveValue::Set(moderator_id as i64),
            points_change: ActiveValue::Set(points_change),
            reason: ActiveValue::Set(reason),
            action_type: ActiveValue::Set(action_type.as_str().to_string()),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a page of history entries for a pair, newest first.
    ///
    /// # Arguments
    /// - `guild_id` / `user_id` - Pair to list entries for
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Page of entries and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::history::Model>, u64), DbErr> {
        let paginator = entity::prelude::History::find()
            .filter(entity::history::Column::GuildId.eq(guild_id as i64))
            .filter(entity::history::Column::UserId.eq(user_id as i64))
            .order_by_desc(entity::history::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator.fetch_page(page).await?;

        Ok((entries, total))
    }

    /// Folds the full history stream of a pair into balance totals.
    ///
    /// Entries are replayed in insertion order. `add`, `subtract`, and
    /// `set` entries apply their literal delta and grow the lifetime
    /// totals; a `reset` entry applies its delta and zeroes both
    /// lifetime totals, matching what the ledger service wrote at reset
    /// time. The result is the balance the pair must hold if no drift
    /// has occurred.
    ///
    /// # Returns
    /// - `Ok(HistoryTotals)` - Folded totals (all zero for an empty stream)
    /// - `Err(DbErr)` - Database error during query
    pub async fn totals_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<HistoryTotals, DbErr> {
        let entries = entity::prelude::History::find()
            .filter(entity::history::Column::GuildId.eq(guild_id as i64))
            .filter(entity::history::Column::UserId.eq(user_id as i64))
            .order_by_asc(entity::history::Column::Id)
            .all(self.db)
            .await?;

        let mut totals = HistoryTotals::default();

        for entry in entries {
            totals.points += entry.points_change;

            match ActionType::parse(&entry.action_type) {
                Some(ActionType::Reset) => {
                    totals.total_earned = 0;
                    totals.total_spent = 0;
                }
                _ => {
                    totals.total_earned += entry.points_change.max(0);
                    totals.total_spent += (-entry.points_change).max(0);
                }
            }
        }

        Ok(totals)
    }

    /// Checks whether any history exists for the pair.
    pub async fn exists_for_user(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::History::find()
            .filter(entity::history::Column::GuildId.eq(guild_id as i64))
            .filter(entity::history::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Moves all history rows from one user id to another within a guild.
    ///
    /// The caller is responsible for checking that the target pair has
    /// no existing rows first.
    pub async fn reassign(
        &self,
        guild_id: u64,
        old_user_id: u64,
        new_user_id: u64,
    ) -> Result<(), DbErr> {
        entity::prelude::History::update_many()
            .col_expr(
                entity::history::Column::UserId,
                sea_orm::sea_query::Expr::value(new_user_id as i64),
            )
            .filter(entity::history::Column::GuildId.eq(guild_id as i64))
            .filter(entity::history::Column::UserId.eq(old_user_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
