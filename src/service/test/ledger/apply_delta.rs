use super::*;

/// Tests that the first delta creates the balance lazily.
///
/// Expected: Ok with the balance existing only after the first mutation
#[tokio::test]
async fn creates_balance_on_first_delta() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    let balance = service
        .apply_delta(1, 42, 7, 5, Some("won the weekly challenge".to_string()), ActionType::Add)
        .await?;

    assert_eq!(balance.points, 5);
    assert_eq!(balance.total_earned, 5);
    assert_eq!(balance.total_spent, 0);

    Ok(())
}

/// Tests that earned and spent accumulate by delta sign.
///
/// Expected: Ok with earned - spent == points after every call
#[tokio::test]
async fn tracks_earned_and_spent() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    let balance = service
        .apply_delta(1, 42, 0, -4, None, ActionType::Subtract)
        .await?;

    assert_eq!(balance.points, 6);
    assert_eq!(balance.total_earned, 10);
    assert_eq!(balance.total_spent, 4);
    assert_eq!(balance.total_earned - balance.total_spent, balance.points);

    Ok(())
}

/// Tests that spending below zero is permitted.
///
/// Negative balances are the documented policy; no clamping.
///
/// Expected: Ok with a negative point total
#[tokio::test]
async fn allows_negative_balance() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    let balance = service
        .apply_delta(1, 42, 0, -10, None, ActionType::Subtract)
        .await?;

    assert_eq!(balance.points, -10);
    assert_eq!(balance.total_spent, 10);

    Ok(())
}

/// Tests that a zero delta is rejected.
///
/// Expected: Err(InvalidAmount) with nothing written
#[tokio::test]
async fn rejects_zero_amount() {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    let result = service.apply_delta(1, 42, 0, 0, None, ActionType::Add).await;

    assert!(matches!(result, Err(LedgerError::InvalidAmount(0))));

    let (_, total) = service.get_history(1, 42, 1, 10).await.unwrap();
    assert_eq!(total, 0);
}

/// Tests that each delta appends exactly one history entry.
///
/// Expected: Ok with history length equal to the number of deltas
#[tokio::test]
async fn appends_history_per_delta() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 7, 5, None, ActionType::Add).await?;
    service
        .apply_delta(1, 42, 7, -2, Some("redeemed a tag".to_string()), ActionType::Subtract)
        .await?;

    let (entries, total) = service.get_history(1, 42, 1, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(entries[0].points_change, -2);
    assert_eq!(entries[0].action_type, ActionType::Subtract);
    assert_eq!(entries[1].points_change, 5);

    Ok(())
}

/// Tests setting the balance to an exact total.
///
/// The recorded history delta is the literal difference from the
/// current balance.
///
/// Expected: Ok with points at the target and a set entry recorded
#[tokio::test]
async fn set_records_literal_delta() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    let balance = service.set_points(1, 42, 7, 4, None).await?;

    assert_eq!(balance.points, 4);

    let (entries, _) = service.get_history(1, 42, 1, 10).await?;
    assert_eq!(entries[0].action_type, ActionType::Set);
    assert_eq!(entries[0].points_change, -6);

    Ok(())
}

/// Tests that setting to the current total writes nothing.
///
/// Expected: Ok with no new history entry
#[tokio::test]
async fn set_to_current_is_noop() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    let balance = service.set_points(1, 42, 0, 10, None).await?;

    assert_eq!(balance.points, 10);

    let (_, total) = service.get_history(1, 42, 1, 10).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests resetting a balance.
///
/// Reset zeroes points and both lifetime totals, recording the delta
/// back to zero.
///
/// Expected: Ok with an all-zero balance and a reset entry
#[tokio::test]
async fn reset_zeroes_everything() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let service = LedgerService::new(&db, Arc::new(PairLocks::new()));

    service.apply_delta(1, 42, 0, 10, None, ActionType::Add).await?;
    service
        .apply_delta(1, 42, 0, -3, None, ActionType::Subtract)
        .await?;

    let balance = service.reset(1, 42, 7, Some("season rollover".to_string())).await?;

    assert_eq!(balance.points, 0);
    assert_eq!(balance.total_earned, 0);
    assert_eq!(balance.total_spent, 0);

    let (entries, _) = service.get_history(1, 42, 1, 10).await?;
    assert_eq!(entries[0].action_type, ActionType::Reset);
    assert_eq!(entries[0].points_change, -7);

    Ok(())
}

/// Tests two concurrent deltas on the same pair.
///
/// Both writers must apply; the per-pair lock prevents the lost-update
/// race where both read the same starting balance.
///
/// Expected: Ok with final points 8 and two history entries
#[tokio::test]
async fn concurrent_deltas_both_apply() -> Result<(), LedgerError> {
    let db = ledger_db().await;
    let locks = Arc::new(PairLocks::new());
    let service = LedgerService::new(&db, locks);

    let (a, b) = tokio::join!(
        service.apply_delta(1, 1, 0, 5, None, ActionType::Add),
        service.apply_delta(1, 1, 0, 3, None, ActionType::Add),
    );
    a?;
    b?;

    let balance = service.get_balance(1, 1).await?;
    assert_eq!(balance.points, 8);

    let (_, total) = service.get_history(1, 1, 1, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
