//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::http::Method;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Log one line per request. Failed requests log at `warn`, health checks
/// at `debug`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let bearer = request.headers().contains_key(AUTHORIZATION);
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        warn!(%method, path, status, duration_ms, "Request failed");
    } else if method == Method::GET && path.ends_with("/health") {
        debug!(path, status, duration_ms, "Health check");
    } else {
        info!(%method, path, status, duration_ms, bearer, "Request handled");
    }

    response
}
