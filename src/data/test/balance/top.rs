use super::*;

/// Tests leaderboard ordering by points descending.
///
/// Expected: Ok with rows ordered highest points first
#[tokio::test]
async fn orders_by_points_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (user, points) in [(10, 5), (11, 50), (12, 20)] {
        factory::balance::BalanceFactory::new(db)
            .guild_id(1)
            .user_id(user)
            .points(points)
            .total_earned(points)
            .build()
            .await?;
    }

    let repo = BalanceRepository::new(db);
    let top = repo.top(1, 10, 0).await?;

    let points: Vec<i64> = top.iter().map(|b| b.points).collect();
    assert_eq!(points, vec![50, 20, 5]);

    Ok(())
}

/// Tests leaderboard tie-breaking by ascending user id.
///
/// Two balances with equal points must order deterministically with the
/// lower user id first.
///
/// Expected: Ok with ties broken by ascending user id
#[tokio::test]
async fn breaks_ties_by_ascending_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user in [30, 12, 25] {
        factory::balance::BalanceFactory::new(db)
            .guild_id(1)
            .user_id(user)
            .points(10)
            .total_earned(10)
            .build()
            .await?;
    }

    let repo = BalanceRepository::new(db);
    let top = repo.top(1, 10, 0).await?;

    let users: Vec<i64> = top.iter().map(|b| b.user_id).collect();
    assert_eq!(users, vec![12, 25, 30]);

    Ok(())
}

/// Tests limit and offset paging.
///
/// Expected: Ok with the second page starting after the first
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user in 1..=5 {
        factory::balance::BalanceFactory::new(db)
            .guild_id(1)
            .user_id(user)
            .points(user * 10)
            .total_earned(user * 10)
            .build()
            .await?;
    }

    let repo = BalanceRepository::new(db);
    let first = repo.top(1, 2, 0).await?;
    let second = repo.top(1, 2, 2).await?;

    let first_points: Vec<i64> = first.iter().map(|b| b.points).collect();
    let second_points: Vec<i64> = second.iter().map(|b| b.points).collect();
    assert_eq!(first_points, vec![50, 40]);
    assert_eq!(second_points, vec![30, 20]);

    Ok(())
}

/// Tests that the leaderboard excludes other guilds.
///
/// Expected: Ok with only the requested guild's rows
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::BalanceFactory::new(db)
        .guild_id(1)
        .user_id(10)
        .points(10)
        .total_earned(10)
        .build()
        .await?;
    factory::balance::BalanceFactory::new(db)
        .guild_id(2)
        .user_id(11)
        .points(99)
        .total_earned(99)
        .build()
        .await?;

    let repo = BalanceRepository::new(db);
    let top = repo.top(1, 10, 0).await?;

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].user_id, 10);

    Ok(())
}
