use crate::server::{config::Config, error::AppError, service::assignment::picker::ReviewerPicker};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the reviewer picker, seeded when `REVIEWER_SEED` is configured.
pub fn setup_reviewer_picker(config: &Config) -> ReviewerPicker {
    match config.reviewer_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded reviewer selection");
            ReviewerPicker::seeded(seed)
        }
        None => ReviewerPicker::new(),
    }
}
