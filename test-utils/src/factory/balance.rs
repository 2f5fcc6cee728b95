//! Balance factory for creating test balance rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test balances with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::balance::BalanceFactory;
///
/// let balance = BalanceFactory::new(&db)
///     .guild_id(1)
///     .user_id(42)
///     .points(100)
///     .build()
///     .await?;
/// ```
pub struct BalanceFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    points: i64,
    total_earned: i64,
    total_spent: i64,
}

impl<'a> BalanceFactory<'a> {
    /// Creates a new BalanceFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`
    /// - user_id: auto-incremented unique id
    /// - points / total_earned / total_spent: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: 1,
            user_id: next_id(),
            points: 0,
            total_earned: 0,
            total_spent: 0,
        }
    }

    /// Sets the guild id for the balance.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the user id for the balance.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the current point total.
    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Sets the lifetime earned total.
    pub fn total_earned(mut self, total_earned: i64) -> Self {
        self.total_earned = total_earned;
        self
    }

    /// Sets the lifetime spent total.
    pub fn total_spent(mut self, total_spent: i64) -> Self {
        self.total_spent = total_spent;
        self
    }

    /// Builds and inserts the balance row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::balance::Model)` - Created balance row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::balance::Model, DbErr> {
        entity::balance::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            points: ActiveValue::Set(self.points),
            total_earned: ActiveValue::Set(self.total_earned),
            total_spent: ActiveValue::Set(self.total_spent),
            last_updated: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a balance with default values.
///
/// Shorthand for `BalanceFactory::new(db).build().await`.
pub async fn create_balance(db: &DatabaseConnection) -> Result<entity::balance::Model, DbErr> {
    BalanceFactory::new(db).build().await
}
