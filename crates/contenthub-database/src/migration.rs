//! Schema migrations for the `documents` table.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{debug, info};

use contenthub_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply pending migrations and return how many the migrator knows about.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, AppError> {
    let known = MIGRATOR.iter().count();
    for migration in MIGRATOR.iter() {
        debug!(version = migration.version, description = %migration.description, "Known migration");
    }

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to migrate documents schema: {e}"),
            e,
        )
    })?;

    info!(migrations = known, "Documents schema is up to date");
    Ok(known)
}
