//! Image host trait for the third-party upload collaborator.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A validated image ready to be handed to an [`ImageHost`].
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Logical folder, usually the owning entity path (e.g. `gallery`).
    pub folder: String,
    /// Original client file name.
    pub file_name: String,
    /// Verified MIME type.
    pub content_type: String,
    /// File content.
    pub data: Bytes,
}

/// Where an uploaded image ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    /// Public URL (or path) stored on the owning record.
    pub url: String,
    /// Host-specific key used for deletion.
    pub key: String,
}

/// Trait for image hosting backends.
///
/// Uploads are awaited by the caller before the owning record is written;
/// implementations must not retry.
#[async_trait]
pub trait ImageHost: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "remote").
    fn provider_type(&self) -> &str;

    /// Check whether the host is usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store an image and return its public reference.
    async fn upload(&self, upload: ImageUpload) -> AppResult<StoredImage>;

    /// Remove a previously stored image by its key.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
