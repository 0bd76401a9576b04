//! Connection to the PostgreSQL document store.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use contenthub_core::config::DatabaseConfig;
use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;

/// Open the PostgreSQL pool backing the document store.
///
/// The pool is verified with one round trip so that a bad URL fails at
/// startup instead of on the first request.
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        "Connecting document store"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Document store unreachable: {e}"),
                e,
            )
        })?;

    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Document store did not answer", e)
    })?;
    Ok(pool)
}

/// Hide the password of a connection URL for logging.
fn mask_password(url: &str) -> String {
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    match url[..at_pos].rfind(':') {
        Some(colon_pos) if colon_pos > scheme_end => {
            format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
