use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShiftSettings::Table)
                    .if_not_exists()
                    .col(big_integer(ShiftSettings::GuildId).primary_key())
                    .col(big_integer_null(ShiftSettings::LogChannelId))
                    .col(text(ShiftSettings::StaffRoleIds).default("[]"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShiftSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShiftSettings {
    Table,
    GuildId,
    LogChannelId,
    StaffRoleIds,
}
