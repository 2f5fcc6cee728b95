use super::*;

/// Tests creating an open shift.
///
/// Expected: Ok with an unpaused open row holding the start note
#[tokio::test]
async fn create_open_inserts_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shift)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let shift = repo
        .create_open(1, 42, Utc::now(), Some("covering tickets".to_string()))
        .await?;

    assert!(shift.end.is_none());
    assert!(!shift.paused);
    assert_eq!(shift.start_note.as_deref(), Some("covering tickets"));
    assert_eq!(shift.pause_intervals, "[]");

    Ok(())
}

/// Tests marking a shift paused and resumed.
///
/// Resuming stores the completed interval and clears the pause state.
///
/// Expected: Ok with one serialized pause interval after the cycle
#[tokio::test]
async fn pause_resume_records_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shift)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let shift = repo.create_open(1, 42, Utc::now(), None).await?;

    let pause_start = Utc::now();
    let shift = repo.mark_paused(shift, pause_start).await?;
    assert!(shift.paused);
    assert_eq!(shift.pause_time, Some(pause_start));

    let pause_end = pause_start + Duration::minutes(5);
    let shift = repo.mark_resumed(shift, &[(pause_start, pause_end)]).await?;

    assert!(!shift.paused);
    assert!(shift.pause_time.is_none());

    let intervals: Vec<(chrono::DateTime<Utc>, chrono::DateTime<Utc>)> =
        serde_json::from_str(&shift.pause_intervals).unwrap();
    assert_eq!(intervals, vec![(pause_start, pause_end)]);

    Ok(())
}

/// Tests closing a shift.
///
/// Expected: Ok with end fields set and pause state cleared
#[tokio::test]
async fn close_sets_end_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shift)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let shift = repo.create_open(1, 42, Utc::now(), None).await?;

    let end = Utc::now() + Duration::hours(1);
    let shift = repo
        .close(shift, end, Some("done".to_string()), &[])
        .await?;

    assert_eq!(shift.end, Some(end));
    assert_eq!(shift.end_note.as_deref(), Some("done"));
    assert!(!shift.paused);

    let repo = ShiftRepository::new(db);
    assert!(repo.find_open(1, 42).await?.is_none());

    Ok(())
}

/// Tests listing closed shifts newest first.
///
/// Expected: Ok with closed rows ordered by end descending, open rows
/// excluded
#[tokio::test]
async fn list_closed_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shift)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for hours_ago in [3, 1, 2] {
        factory::shift::ShiftFactory::new(db)
            .guild_id(1)
            .user_id(42)
            .start(now - Duration::hours(hours_ago + 1))
            .end(now - Duration::hours(hours_ago))
            .build()
            .await?;
    }
    factory::shift::create_open_shift(db, 1, 42).await?;

    let repo = ShiftRepository::new(db);
    let closed = repo.list_closed_for_user(1, 42, 10).await?;

    assert_eq!(closed.len(), 3);
    let ends: Vec<_> = closed.iter().map(|s| s.end.unwrap()).collect();
    assert!(ends[0] > ends[1] && ends[1] > ends[2]);

    Ok(())
}
