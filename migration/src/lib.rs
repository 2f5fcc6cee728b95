pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_balance_table;
mod m20260810_000002_create_history_table;
mod m20260811_000003_create_guild_config_table;
mod m20260812_000004_create_shift_table;
mod m20260812_000005_create_shift_settings_table;
mod m20260824_000006_add_bonus_columns_to_guild_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_balance_table::Migration),
            Box::new(m20260810_000002_create_history_table::Migration),
            Box::new(m20260811_000003_create_guild_config_table::Migration),
            Box::new(m20260812_000004_create_shift_table::Migration),
            Box::new(m20260812_000005_create_shift_settings_table::Migration),
            Box::new(m20260824_000006_add_bonus_columns_to_guild_config::Migration),
        ]
    }
}
