use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260811_000003_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .add_column(big_integer_null(GuildConfig::DailyBonus))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .add_column(big_integer_null(GuildConfig::WeeklyBonus))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .drop_column(GuildConfig::DailyBonus)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .drop_column(GuildConfig::WeeklyBonus)
                    .to_owned(),
            )
            .await
    }
}
