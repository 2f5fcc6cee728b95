use crate::{config::Config, error::LedgerError};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection to the database using the connection string
/// from configuration, then runs all pending SeaORM migrations so the
/// schema is up-to-date before any ledger or shift operation executes.
/// Migrations are versioned and idempotent; re-running them on an
/// already-current database is a no-op.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(LedgerError)` - Failed to connect or run migrations
pub async fn connect_to_database(
    config: &Config,
) -> Result<sea_orm::DatabaseConnection, LedgerError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}
