//! Local filesystem image host.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::traits::{ImageHost, ImageUpload, StoredImage};

use super::sanitize_folder;
use crate::validation::ImageKind;

/// Writes images below a root directory that the API serves statically.
#[derive(Debug, Clone)]
pub struct LocalImageHost {
    /// Root directory for stored images.
    root: PathBuf,
    /// URL prefix the root is served under (e.g. `/uploads`).
    public_base_url: String,
}

impl LocalImageHost {
    /// Create a host rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: impl AsRef<Path>, public_base_url: &str) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Root directory of stored images.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key inside the root, rejecting anything that escapes it.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::validation(format!("Invalid image key: {key}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageHost for LocalImageHost {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn upload(&self, upload: ImageUpload) -> AppResult<StoredImage> {
        let extension = ImageKind::from_mime(&upload.content_type)
            .map(|k| k.extension())
            .unwrap_or("bin");
        let key = format!(
            "{}/{}.{extension}",
            sanitize_folder(&upload.folder),
            Uuid::new_v4()
        );
        let path = self.resolve(&key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        fs::write(&path, &upload.data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write image: {key}"), e)
        })?;

        debug!(key, bytes = upload.data.len(), file = %upload.file_name, "Stored image");
        Ok(StoredImage {
            url: format!("{}/{key}", self.public_base_url),
            key,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete image: {key}"),
                e,
            )),
        }
    }
}
