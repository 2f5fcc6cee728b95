//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a balance together with a matching history stream.
///
/// Inserts `deltas.len()` history entries for the pair and a balance row
/// whose totals fold the deltas exactly, so the pair starts reconciled.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild scope for the rows
/// - `user_id` - User the rows belong to
/// - `deltas` - Signed point changes, applied in order
///
/// # Returns
/// - `Ok(balance)` - The inserted balance row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reconciled_pair(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    deltas: &[i64],
) -> Result<entity::balance::Model, DbErr> {
    let mut points = 0;
    let mut earned = 0;
    let mut spent = 0;

    for &delta in deltas {
        let action = if delta >= 0 { "add" } else { "subtract" };
        crate::factory::history::HistoryFactory::new(db)
            .guild_id(guild_id)
            .user_id(user_id)
            .points_change(delta)
            .action_type(action)
            .build()
            .await?;

        points += delta;
        earned += delta.max(0);
        spent += (-delta).max(0);
    }

    crate::factory::balance::BalanceFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .points(points)
        .total_earned(earned)
        .total_spent(spent)
        .build()
        .await
}
