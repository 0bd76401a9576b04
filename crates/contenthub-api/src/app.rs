//! Application builder: wires router, middleware, and state into an Axum
//! app, and runs it.

use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use contenthub_core::config::AppConfig;
use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_database::build_store;
use contenthub_storage::ImageHostManager;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

/// Runs the ContentHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting ContentHub server...");

    let store = build_store(&config.store, &config.database).await?;
    let images = ImageHostManager::from_config(&config.uploads).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, store, images));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "ContentHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("ContentHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
