use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository providing database operations for balance rows.
///
/// Balance rows are a materialized projection of the history stream;
/// only the ledger service writes them, always together with the
/// matching history entry.
pub struct BalanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BalanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the balance for a (guild, user) pair.
    ///
    /// Returns a zero-valued, unpersisted balance when no row exists;
    /// missing pairs are never an error.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID (u64)
    /// - `user_id` - Discord user ID (u64)
    ///
    /// # Returns
    /// - `Ok(Model)` - Stored balance, or the zero default
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<entity::balance::Model, DbErr> {
        let found = entity::prelude::Balance::find_by_id((guild_id as i64, user_id as i64))
            .one(self.db)
            .await?;

        Ok(found.unwrap_or(entity::balance::Model {
            guild_id: guild_id as i64,
            user_id: user_id as i64,
            points: 0,
            total_earned: 0,
            total_spent: 0,
            last_updated: Utc::now(),
        }))
    }

    /// Replaces the balance row for a (guild, user) pair.
    ///
    /// Inserts the row if missing, otherwise overwrites every value
    /// column. Called only by the ledger service after it has computed
    /// the new totals; command handlers never call this directly.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored balance after the write
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: u64,
        user_id: u64,
        points: i64,
        total_earned: i64,
        total_spent: i64,
    ) -> Result<entity::balance::Model, DbErr> {
        entity::prelude::Balance::insert(entity::balance::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
            points: ActiveValue::Set(points),
            total_earned: ActiveValue::Set(total_earned),
            total_spent: ActiveValue::Set(total_spent),
            last_updated: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::balance::Column::GuildId,
                entity::balance::Column::UserId,
            ])
            .update_columns([
                entity::balance::Column::Points,
                entity::balance::Column::TotalEarned,
                entity::balance::Column::TotalSpent,
                entity::balance::Column::LastUpdated,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the top balances for a guild.
    ///
    /// Ordered by points descending; ties are broken by ascending user
    /// id so the ranking is a deterministic total order.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID (u64)
    /// - `limit` - Maximum number of rows to return
    /// - `offset` - Number of leading rows to skip
    ///
    /// # Returns
    /// - `Ok(balances)` - Ordered balance rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn top(
        &self,
        guild_id: u64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::balance::Model>, DbErr> {
        entity::prelude::Balance::find()
            .filter(entity::balance::Column::GuildId.eq(guild_id as i64))
            .order_by_desc(entity::balance::Column::Points)
            .order_by_asc(entity::balance::Column::UserId)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Checks whether a balance row exists for the pair.
    pub async fn exists(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::Balance::find()
            .filter(entity::balance::Column::GuildId.eq(guild_id as i64))
            .filter(entity::balance::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the balance row for a pair, if present.
    ///
    /// Used by administrative reset paths; normal operation never
    /// removes balances.
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::Balance::delete_by_id((guild_id as i64, user_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves the balance row from one user id to another within a guild.
    ///
    /// The caller is responsible for checking that the target pair has
    /// no existing rows first.
    pub async fn reassign(
        &self,
        guild_id: u64,
        old_user_id: u64,
        new_user_id: u64,
    ) -> Result<(), DbErr> {
        entity::prelude::Balance::update_many()
            .col_expr(
                entity::balance::Column::UserId,
                sea_orm::sea_query::Expr::value(new_user_id as i64),
            )
            .filter(entity::balance::Column::GuildId.eq(guild_id as i64))
            .filter(entity::balance::Column::UserId.eq(old_user_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
