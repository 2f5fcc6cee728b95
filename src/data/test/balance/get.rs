use super::*;

/// Tests getting a balance for a pair with no stored row.
///
/// Verifies that a missing balance defaults to zero values rather than
/// erroring, and that the default is not persisted.
///
/// Expected: Ok with zero balance, no row in the database
#[tokio::test]
async fn defaults_to_zero_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    let balance = repo.get(1, 42).await?;

    assert_eq!(balance.guild_id, 1);
    assert_eq!(balance.user_id, 42);
    assert_eq!(balance.points, 0);
    assert_eq!(balance.total_earned, 0);
    assert_eq!(balance.total_spent, 0);

    // The default must not be written
    use sea_orm::{EntityTrait, PaginatorTrait};
    let count = entity::prelude::Balance::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests getting a stored balance.
///
/// Expected: Ok with the stored values
#[tokio::test]
async fn returns_stored_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::BalanceFactory::new(db)
        .guild_id(1)
        .user_id(42)
        .points(30)
        .total_earned(50)
        .total_spent(20)
        .build()
        .await?;

    let repo = BalanceRepository::new(db);
    let balance = repo.get(1, 42).await?;

    assert_eq!(balance.points, 30);
    assert_eq!(balance.total_earned, 50);
    assert_eq!(balance.total_spent, 20);

    Ok(())
}

/// Tests that balances are guild-scoped.
///
/// The same user id in a different guild has its own independent
/// balance.
///
/// Expected: Ok with zero balance in the other guild
#[tokio::test]
async fn scopes_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Balance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::BalanceFactory::new(db)
        .guild_id(1)
        .user_id(42)
        .points(30)
        .total_earned(30)
        .build()
        .await?;

    let repo = BalanceRepository::new(db);
    let other_guild = repo.get(2, 42).await?;

    assert_eq!(other_guild.points, 0);

    Ok(())
}
