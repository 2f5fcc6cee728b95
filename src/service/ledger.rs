use std::sync::Arc;
use std::time::Duration;

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{BalanceRepository, GuildConfigRepository, HistoryRepository},
    error::LedgerError,
    model::{
        config::GuildConfig,
        ledger::{ActionType, Balance, HistoryEntry, LeaderboardEntry, LeaderboardPage},
    },
    service::locks::PairLocks,
};

/// Maximum page size for leaderboard and history queries, bounding
/// response size for the calling command handler.
const MAX_PAGE_SIZE: u64 = 25;

/// Backoff before retrying a failed ledger transaction once.
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// The single writer of balance rows.
///
/// Every mutation appends a history entry and replaces the balance row
/// in one transaction, under the pair's lock, so the balance stays a
/// faithful projection of the history stream and concurrent deltas on
/// the same pair cannot lose updates.
pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
    locks: Arc<PairLocks>,
}

impl<'a> LedgerService<'a> {
    /// Creates a new LedgerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Shared per-pair lock map owned by the embedding
    ///   application
    pub fn new(db: &'a DatabaseConnection, locks: Arc<PairLocks>) -> Self {
        Self { db, locks }
    }

    /// Applies a signed point delta to a pair's balance.
    ///
    /// The single entry point for `add` and `subtract`: the sign of
    /// `amount` determines the effect, `action_type` records the
    /// caller's intent in history. Negative resulting balances are
    /// permitted; spending is never clamped.
    ///
    /// # Arguments
    /// - `guild_id` / `user_id` - Pair the change applies to
    /// - `moderator_id` - Actor who caused the change; 0 for system
    /// - `amount` - Signed point change; must be non-zero
    /// - `reason` - Optional free-text reason recorded in history
    /// - `action_type` - `Add` or `Subtract`
    ///
    /// # Returns
    /// - `Ok(Balance)` - The updated balance
    /// - `Err(LedgerError::InvalidAmount)` - Zero amount
    /// - `Err(LedgerError::Storage)` - Transaction failed after one retry
    pub async fn apply_delta(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        amount: i64,
        reason: Option<String>,
        action_type: ActionType,
    ) -> Result<Balance, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        self.apply_locked(guild_id, user_id, moderator_id, amount, reason, action_type)
            .await
    }

    /// Sets a pair's balance to an exact point total.
    ///
    /// Computes the delta from the current balance and records it in
    /// history with action type `Set`, so the stream still replays to
    /// the stored balance. A `set` to the current total is a no-op and
    /// returns the unchanged balance without writing history.
    ///
    /// # Returns
    /// - `Ok(Balance)` - The updated balance
    /// - `Err(LedgerError::Storage)` - Transaction failed after one retry
    pub async fn set_points(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        target: i64,
        reason: Option<String>,
    ) -> Result<Balance, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let current = BalanceRepository::new(self.db).get(guild_id, user_id).await?;
        let amount = target - current.points;

        if amount == 0 {
            return Ok(Balance::from_entity(current));
        }

        self.apply_locked(
            guild_id,
            user_id,
            moderator_id,
            amount,
            reason,
            ActionType::Set,
        )
        .await
    }

    /// Resets a pair's balance to zero, including lifetime totals.
    ///
    /// Records a `Reset` history entry carrying the delta back to zero.
    /// Resetting an already-zero balance returns it unchanged without
    /// writing history.
    ///
    /// # Returns
    /// - `Ok(Balance)` - The zeroed balance
    /// - `Err(LedgerError::Storage)` - Transaction failed after one retry
    pub async fn reset(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        reason: Option<String>,
    ) -> Result<Balance, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let current = BalanceRepository::new(self.db).get(guild_id, user_id).await?;

        if current.points == 0 && current.total_earned == 0 && current.total_spent == 0 {
            return Ok(Balance::from_entity(current));
        }

        self.apply_locked(
            guild_id,
            user_id,
            moderator_id,
            -current.points,
            reason,
            ActionType::Reset,
        )
        .await
    }

    /// Gets a pair's balance, defaulting to zero when absent.
    pub async fn get_balance(&self, guild_id: u64, user_id: u64) -> Result<Balance, LedgerError> {
        let balance = BalanceRepository::new(self.db).get(guild_id, user_id).await?;

        Ok(Balance::from_entity(balance))
    }

    /// Gets one page of a guild's leaderboard.
    ///
    /// Pages are 1-based; a page of 0 is treated as 1. `page_size` is
    /// clamped to 1..=25.
    ///
    /// # Returns
    /// - `Ok(LeaderboardPage)` - Ranked entries, possibly empty
    /// - `Err(LedgerError::Storage)` - Database error during query
    pub async fn get_leaderboard(
        &self,
        guild_id: u64,
        page: u64,
        page_size: u64,
    ) -> Result<LeaderboardPage, LedgerError> {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * page_size;

        let balances = BalanceRepository::new(self.db)
            .top(guild_id, page_size, offset)
            .await?;

        let entries = balances
            .into_iter()
            .enumerate()
            .map(|(i, b)| LeaderboardEntry {
                rank: offset + i as u64 + 1,
                user_id: b.user_id as u64,
                points: b.points,
            })
            .collect();

        Ok(LeaderboardPage {
            page,
            page_size,
            entries,
        })
    }

    /// Gets one page of a pair's history, newest first.
    ///
    /// Pages are 1-based with the same size clamp as the leaderboard.
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Page of entries and the total count
    /// - `Err(LedgerError::Storage)` - Database error during query
    pub async fn get_history(
        &self,
        guild_id: u64,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<HistoryEntry>, u64), LedgerError> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);

        let (entries, total) = HistoryRepository::new(self.db)
            .list_for_user(guild_id, user_id, page - 1, per_page)
            .await?;

        let entries = entries
            .into_iter()
            .map(HistoryEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }

    /// Recomputes a pair's balance purely from its history stream and
    /// overwrites the stored row.
    ///
    /// Idempotent and safe to repeat; this is the only sanctioned
    /// repair path for drift between a balance and its history. Drift
    /// found on the stored row is logged before it is overwritten.
    ///
    /// # Returns
    /// - `Ok(Balance)` - The reconciled balance
    /// - `Err(LedgerError::Storage)` - Database error during the rebuild
    pub async fn reconcile(&self, guild_id: u64, user_id: u64) -> Result<Balance, LedgerError> {
        let lock = self.locks.lock_for(guild_id, user_id);
        let _guard = lock.lock().await;

        let stored = BalanceRepository::new(self.db).get(guild_id, user_id).await?;
        let totals = HistoryRepository::new(self.db)
            .totals_for_user(guild_id, user_id)
            .await?;

        if stored.points != totals.points
            || stored.total_earned != totals.total_earned
            || stored.total_spent != totals.total_spent
        {
            tracing::info!(
                guild_id,
                user_id,
                stored_points = stored.points,
                replayed_points = totals.points,
                "Balance drift detected, overwriting from history"
            );
        }

        let balance = BalanceRepository::new(self.db)
            .upsert(
                guild_id,
                user_id,
                totals.points,
                totals.total_earned,
                totals.total_spent,
            )
            .await?;

        Ok(Balance::from_entity(balance))
    }

    /// Moves a user's ledger rows (balance and history) to a new user
    /// id within a guild.
    ///
    /// Replaces the bespoke backfill scripts used when a ledger was
    /// seeded with placeholder identifiers. Fails without writing
    /// anything if the target pair already has a balance or history.
    ///
    /// # Returns
    /// - `Ok(())` - Rows moved
    /// - `Err(LedgerError::IdentityConflict)` - Target pair already has
    ///   ledger rows, or the ids are identical
    /// - `Err(LedgerError::Storage)` - Database error during the move
    pub async fn reassign_identity(
        &self,
        guild_id: u64,
        old_user_id: u64,
        new_user_id: u64,
    ) -> Result<(), LedgerError> {
        // Identical ids would acquire the same pair lock twice below;
        // the target already owns the source's rows in that case.
        if old_user_id == new_user_id {
            return Err(LedgerError::IdentityConflict {
                guild: guild_id,
                user: new_user_id,
            });
        }

        // Lock both pairs in a fixed order so two overlapping
        // reassignments cannot deadlock.
        let (first, second) = if old_user_id <= new_user_id {
            (old_user_id, new_user_id)
        } else {
            (new_user_id, old_user_id)
        };
        let first_lock = self.locks.lock_for(guild_id, first);
        let _first_guard = first_lock.lock().await;
        let second_lock = self.locks.lock_for(guild_id, second);
        let _second_guard = second_lock.lock().await;

        let balances = BalanceRepository::new(self.db);
        let history = HistoryRepository::new(self.db);

        if balances.exists(guild_id, new_user_id).await?
            || history.exists_for_user(guild_id, new_user_id).await?
        {
            return Err(LedgerError::IdentityConflict {
                guild: guild_id,
                user: new_user_id,
            });
        }

        let txn = self.db.begin().await?;

        BalanceRepository::new(&txn)
            .reassign(guild_id, old_user_id, new_user_id)
            .await?;
        HistoryRepository::new(&txn)
            .reassign(guild_id, old_user_id, new_user_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Gets a guild's ledger configuration, defaulting when absent.
    pub async fn get_config(&self, guild_id: u64) -> Result<GuildConfig, LedgerError> {
        Ok(GuildConfigRepository::new(self.db).get(guild_id).await?)
    }

    /// Replaces a guild's ledger configuration.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration stored
    /// - `Err(LedgerError::ConfigInvalid)` - Zero role or channel id
    /// - `Err(LedgerError::Storage)` - Database error during the write
    pub async fn put_config(&self, guild_id: u64, config: &GuildConfig) -> Result<(), LedgerError> {
        if config.staff_role_ids.iter().any(|&id| id == 0) {
            return Err(LedgerError::ConfigInvalid(
                "Staff role ids must be non-zero".to_string(),
            ));
        }
        if config.points_channel_id == Some(0) {
            return Err(LedgerError::ConfigInvalid(
                "Points channel id must be non-zero".to_string(),
            ));
        }

        GuildConfigRepository::new(self.db).put(guild_id, config).await?;

        Ok(())
    }

    /// Runs the read-modify-write under an already-held pair lock,
    /// retrying the transaction once on storage failure.
    async fn apply_locked(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        amount: i64,
        reason: Option<String>,
        action_type: ActionType,
    ) -> Result<Balance, LedgerError> {
        match self
            .try_apply(guild_id, user_id, moderator_id, amount, &reason, action_type)
            .await
        {
            Ok(balance) => Ok(balance),
            Err(e) => {
                tracing::warn!(guild_id, user_id, error = %e, "Ledger transaction failed, retrying once");
                tokio::time::sleep(RETRY_BACKOFF).await;

                self.try_apply(guild_id, user_id, moderator_id, amount, &reason, action_type)
                    .await
                    .map_err(LedgerError::Storage)
            }
        }
    }

    /// One attempt at the atomic history-append + balance-replace.
    async fn try_apply(
        &self,
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        amount: i64,
        reason: &Option<String>,
        action_type: ActionType,
    ) -> Result<Balance, DbErr> {
        let txn = self.db.begin().await?;

        let current = BalanceRepository::new(&txn).get(guild_id, user_id).await?;

        let (new_points, new_earned, new_spent) = match action_type {
            // A reset zeroes the lifetime totals along with the points;
            // the recorded delta still replays to the same balance.
            ActionType::Reset => (current.points + amount, 0, 0),
            _ => (
                current.points + amount,
                current.total_earned + amount.max(0),
                current.total_spent + (-amount).max(0),
            ),
        };

        HistoryRepository::new(&txn)
            .append(
                guild_id,
                user_id,
                moderator_id,
                amount,
                reason.clone(),
                action_type,
            )
            .await?;

        let balance = BalanceRepository::new(&txn)
            .upsert(guild_id, user_id, new_points, new_earned, new_spent)
            .await?;

        txn.commit().await?;

        Ok(Balance::from_entity(balance))
    }
}
