use super::*;

/// Tests the consistency law for a plain delta sequence.
///
/// Replaying the history stream through reconcile must yield exactly
/// the balance produced incrementally.
///
/// Expected: Ok with the reconciled balance equal to the incremental one
#[tokio::test]
async fn reconcile_matches_incremental_balance() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    for delta in [10, -4, 7, -1, -20, 3] {
        let action = if delta > 0 {
            ActionType::Add
        } else {
            ActionType::Subtract
        };
        service.apply_delta(1, 42, 0, delta, None, action).await?;
    }

    let incremental = service.get_balance(1, 42).await?;
    let reconciled = service.reconcile(1, 42).await?;

    assert_eq!(reconciled.points, incremental.points);
    assert_eq!(reconciled.total_earned, incremental.total_earned);
    assert_eq!(reconciled.total_spent, incremental.total_spent);
    assert_eq!(reconciled.total_earned - reconciled.total_spent, reconciled.points);

    Ok(())
}

/// Tests the consistency law across set and reset actions.
///
/// Expected: Ok with the reconciled balance equal to the incremental one
#[tokio::test]
async fn reconcile_matches_across_set_and_reset() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    service.set_points(1, 42, 0, 25, None).await?;
    service.reset(1, 42, 0, None).await?;
    service.apply_delta(1, 42, 0, 6, None, ActionType::Add).await?;
    service
        .apply_delta(1, 42, 0, -2, None, ActionType::Subtract)
        .await?;

    let incremental = service.get_balance(1, 42).await?;
    let reconciled = service.reconcile(1, 42).await?;

    assert_eq!(reconciled.points, 4);
    assert_eq!(reconciled.points, incremental.points);
    assert_eq!(reconciled.total_earned, incremental.total_earned);
    assert_eq!(reconciled.total_spent, incremental.total_spent);

    Ok(())
}

/// Tests that reconcile repairs a drifted balance.
///
/// A balance corrupted outside the service must be rebuilt from the
/// history stream alone.
///
/// Expected: Ok with the stored row overwritten by the replayed totals
#[tokio::test]
async fn reconcile_repairs_drift() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;

    // Corrupt the projection behind the service's back
    crate::data::BalanceRepository::new(&db)
        .upsert(1, 42, 999, 999, 0)
        .await?;

    let reconciled = service.reconcile(1, 42).await?;

    assert_eq!(reconciled.points, 10);
    assert_eq!(reconciled.total_earned, 10);
    assert_eq!(service.get_balance(1, 42).await?.points, 10);

    Ok(())
}

/// Tests that reconcile is idempotent.
///
/// Expected: Ok with a second reconcile returning the same balance
#[tokio::test]
async fn reconcile_is_idempotent() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    service
        .apply_delta(1, 42, 0, -3, None, ActionType::Subtract)
        .await?;

    let first = service.reconcile(1, 42).await?;
    let second = service.reconcile(1, 42).await?;

    assert_eq!(first.points, second.points);
    assert_eq!(first.total_earned, second.total_earned);
    assert_eq!(first.total_spent, second.total_spent);

    Ok(())
}

/// Tests reconciling a pair with no history.
///
/// Expected: Ok with an all-zero balance
#[tokio::test]
async fn reconcile_empty_stream_yields_zero() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    let balance = service.reconcile(1, 42).await?;

    assert_eq!(balance.points, 0);
    assert_eq!(balance.total_earned, 0);
    assert_eq!(balance.total_spent, 0);

    Ok(())
}
