//! Image uploads for entity image fields.

use bytes::Bytes;
use tracing::info;

use contenthub_core::result::AppResult;
use contenthub_core::traits::{ImageUpload, StoredImage};
use contenthub_storage::{ImageHostManager, validate_image};

/// Validates uploads and hands them to the active image host.
#[derive(Debug, Clone)]
pub struct UploadService {
    images: ImageHostManager,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(images: ImageHostManager) -> Self {
        Self { images }
    }

    /// The image host in use.
    pub fn images(&self) -> &ImageHostManager {
        &self.images
    }

    /// Validate and store one image for the entity at `folder`.
    ///
    /// Nothing reaches the host unless validation passes.
    pub async fn upload_image(
        &self,
        folder: &str,
        file_name: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> AppResult<StoredImage> {
        let kind = validate_image(content_type, &data, self.images.max_size_bytes())?;
        let stored = self
            .images
            .host()
            .upload(ImageUpload {
                folder: folder.to_string(),
                file_name: file_name.to_string(),
                content_type: kind.mime().to_string(),
                data,
            })
            .await?;
        info!(folder, key = %stored.key, "Uploaded image");
        Ok(stored)
    }
}
