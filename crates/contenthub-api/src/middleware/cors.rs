//! CORS layer for the admin frontend.

use std::time::Duration;

use axum::http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use contenthub_core::config::CorsConfig;

/// Build the CORS layer.
///
/// With a wildcard origin the session cookie cannot cross origins, so
/// credentials are only allowed for an explicit origin list.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT_LANGUAGE])
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    layer.allow_origin(origins).allow_credentials(true)
}
