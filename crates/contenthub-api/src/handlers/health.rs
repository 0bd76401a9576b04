//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, ComponentHealth, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// 200 when the document store answers, 503 otherwise.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let store_ok = state.store.health_check().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Document store health check failed");
        false
    });
    let images = state.uploads.images();
    let images_ok = images.health_check().await;

    let status = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthResponse {
        status: if store_ok && images_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: ComponentHealth {
            provider: state.store.provider_type().to_string(),
            healthy: store_ok,
        },
        images: ComponentHealth {
            provider: images.host().provider_type().to_string(),
            healthy: images_ok,
        },
    };
    (status, Json(ApiResponse::ok(body)))
}
