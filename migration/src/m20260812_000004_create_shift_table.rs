use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(big_integer(Shift::GuildId))
                    .col(big_integer(Shift::UserId))
                    .col(timestamp(Shift::Start))
                    .col(timestamp_null(Shift::End))
                    .col(text_null(Shift::StartNote))
                    .col(text_null(Shift::EndNote))
                    .col(boolean(Shift::Paused).default(false))
                    .col(timestamp_null(Shift::PauseTime))
                    .col(text(Shift::PauseIntervals).default("[]"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shift_guild_user")
                    .table(Shift::Table)
                    .col(Shift::GuildId)
                    .col(Shift::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    GuildId,
    UserId,
    Start,
    End,
    StartNote,
    EndNote,
    Paused,
    PauseTime,
    PauseIntervals,
}
