use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(History::Table)
                    .if_not_exists()
                    .col(pk_auto(History::Id))
                    .col(big_integer(History::GuildId))
                    .col(big_integer(History::UserId))
                    .col(big_integer(History::ModeratorId))
                    .col(big_integer(History::PointsChange))
                    .col(text_null(History::Reason))
                    .col(string(History::ActionType))
                    .col(
                        timestamp(History::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_history_guild_user")
                    .table(History::Table)
                    .col(History::GuildId)
                    .col(History::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(History::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum History {
    Table,
    Id,
    GuildId,
    UserId,
    ModeratorId,
    PointsChange,
    Reason,
    ActionType,
    Timestamp,
}
