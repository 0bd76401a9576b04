//! Route definitions for the ContentHub HTTP API.
//!
//! Every catalog entity gets the same generic routes, mounted under `/api`
//! with its descriptor attached as an extension. Settings singletons are
//! mounted the same way.

use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use contenthub_entity::catalog;
use contenthub_entity::{EntityDescriptor, SettingsDescriptor};

use crate::extractors::{Entity, SettingsPage};
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Room for multipart framing on top of the image size limit, so oversized
/// images reach validation and get a 400 instead of a bare 413.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.uploads.max_size_bytes as usize + MULTIPART_OVERHEAD_BYTES;

    let mut api_routes = Router::new().merge(auth_routes()).merge(health_routes());
    for entity in catalog::all() {
        api_routes = api_routes.merge(entity_routes(entity));
    }
    for page in catalog::settings() {
        api_routes = api_routes.merge(settings_routes(page));
    }

    let mut router = Router::new().nest("/api", api_routes);
    let mount = state.config.uploads.public_base_url.trim_end_matches('/');
    if let Some(root) = state.uploads.images().local_root() {
        if mount.starts_with('/') && mount.len() > 1 {
            router = router.nest_service(mount, ServeDir::new(root));
        }
    }

    router
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Generic CRUD, upload, and (where the entity has one) lookup routes.
fn entity_routes(entity: &'static EntityDescriptor) -> Router<AppState> {
    let base = format!("/{}", entity.path);
    let mut routes = Router::new()
        .route(
            &base,
            get(handlers::content::list).post(handlers::content::create),
        )
        .route(&format!("{base}/upload"), post(handlers::upload::upload))
        .route(
            &format!("{base}/{{id}}"),
            get(handlers::content::get)
                .put(handlers::content::update)
                .delete(handlers::content::delete),
        );
    if let Some(field) = entity.lookup_field {
        routes = routes.route(
            &format!("{base}/{field}/{{value}}"),
            get(handlers::content::get_by_lookup),
        );
    }
    routes.layer(Extension(Entity(entity)))
}

/// GET and PUT for one settings page.
fn settings_routes(page: &'static SettingsDescriptor) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{}", page.path),
            get(handlers::settings::get).put(handlers::settings::upsert),
        )
        .layer(Extension(SettingsPage(page)))
}

/// Auth endpoints: login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
