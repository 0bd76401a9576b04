//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use contenthub_auth::AdminAuthenticator;
use contenthub_core::config::AppConfig;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::Locale;
use contenthub_service::{ContentService, SettingsService, UploadService};
use contenthub_storage::ImageHostManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Locale used when a request carries no recognized language signal
    pub default_locale: Locale,
    /// Document store backing every repository
    pub store: Arc<dyn DocumentStore>,
    /// Admin credential and session token checks
    pub auth: Arc<AdminAuthenticator>,
    /// Generic content CRUD
    pub content: Arc<ContentService>,
    /// Settings singletons
    pub settings: Arc<SettingsService>,
    /// Image validation and hosting
    pub uploads: Arc<UploadService>,
}

impl AppState {
    /// Wire services around the given collaborators.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>, images: ImageHostManager) -> Self {
        Self {
            default_locale: Locale::from_tag_or_default(&config.locale.default),
            auth: Arc::new(AdminAuthenticator::new(&config.auth)),
            content: Arc::new(ContentService::new(Arc::clone(&store))),
            settings: Arc::new(SettingsService::new(Arc::clone(&store))),
            uploads: Arc::new(UploadService::new(images)),
            store,
            config: Arc::new(config),
        }
    }
}
