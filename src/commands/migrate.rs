//! Database migration command.

use contenthub_core::config::{AppConfig, StoreProvider};
use contenthub_core::error::AppError;
use contenthub_database::migration::run_migrations;

/// Connect to PostgreSQL and apply pending migrations.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.store.provider == StoreProvider::Memory {
        tracing::warn!("store.provider is memory; migrations target the configured database anyway");
    }
    let pool = contenthub_database::connect(&config.database).await?;
    let count = run_migrations(&pool).await?;
    println!("Documents schema up to date ({count} migrations).");
    Ok(())
}
