//! Image host selection from configuration.

use std::sync::Arc;

use tracing::info;

use contenthub_core::config::{UploadProvider, UploadsConfig};
use contenthub_core::result::AppResult;
use contenthub_core::traits::ImageHost;

use crate::providers::{LocalImageHost, RemoteImageHost};

/// Holds the active image host and the upload limits it is used with.
#[derive(Debug, Clone)]
pub struct ImageHostManager {
    host: Arc<dyn ImageHost>,
    max_size_bytes: u64,
    local_root: Option<String>,
}

impl ImageHostManager {
    /// Wrap an already-built host.
    pub fn new(host: Arc<dyn ImageHost>, max_size_bytes: u64) -> Self {
        Self {
            host,
            max_size_bytes,
            local_root: None,
        }
    }

    /// Build the host named by `uploads.provider`.
    pub async fn from_config(config: &UploadsConfig) -> AppResult<Self> {
        let manager = match config.provider {
            UploadProvider::Local => {
                let host =
                    LocalImageHost::new(&config.local_dir, &config.public_base_url).await?;
                Self {
                    host: Arc::new(host),
                    max_size_bytes: config.max_size_bytes,
                    local_root: Some(config.local_dir.clone()),
                }
            }
            UploadProvider::Remote => Self::new(
                Arc::new(RemoteImageHost::new(
                    &config.remote_endpoint,
                    &config.remote_api_key,
                )?),
                config.max_size_bytes,
            ),
        };
        info!(
            provider = manager.host.provider_type(),
            max_size_bytes = manager.max_size_bytes,
            "Image host ready"
        );
        Ok(manager)
    }

    /// The active host.
    pub fn host(&self) -> Arc<dyn ImageHost> {
        Arc::clone(&self.host)
    }

    /// Upload size ceiling in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Directory to serve statically, when the local host is active.
    pub fn local_root(&self) -> Option<&str> {
        self.local_root.as_deref()
    }

    /// Whether the active host is usable.
    pub async fn health_check(&self) -> bool {
        self.host.health_check().await.unwrap_or(false)
    }
}
