use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Balance::Table)
                    .if_not_exists()
                    .col(big_integer(Balance::GuildId))
                    .col(big_integer(Balance::UserId))
                    .col(big_integer(Balance::Points).default(0))
                    .col(big_integer(Balance::TotalEarned).default(0))
                    .col(big_integer(Balance::TotalSpent).default(0))
                    .col(
                        timestamp(Balance::LastUpdated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_balance")
                            .col(Balance::GuildId)
                            .col(Balance::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Balance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Balance {
    Table,
    GuildId,
    UserId,
    Points,
    TotalEarned,
    TotalSpent,
    LastUpdated,
}
