//! Access to the content API from the admin interface.

pub mod http;

use async_trait::async_trait;
use bytes::Bytes;

use contenthub_core::result::AppResult;
use contenthub_core::types::{Document, Fields};
use contenthub_entity::EntityDescriptor;

pub use self::http::HttpContentClient;

/// An image picked in the form but not uploaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    /// Original file name.
    pub file_name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// File content.
    pub data: Bytes,
}

/// Content operations available to an authenticated admin.
#[async_trait]
pub trait ContentClient: Send + Sync + std::fmt::Debug {
    /// Every document of the entity, active or not, in listing order.
    async fn list(&self, entity: &EntityDescriptor) -> AppResult<Vec<Document>>;

    /// Create a document and return it as stored.
    async fn create(&self, entity: &EntityDescriptor, fields: Fields) -> AppResult<Document>;

    /// Apply a patch and return the updated document.
    async fn update(
        &self,
        entity: &EntityDescriptor,
        id: &str,
        fields: Fields,
    ) -> AppResult<Document>;

    /// Hard-delete a document.
    async fn delete(&self, entity: &EntityDescriptor, id: &str) -> AppResult<()>;

    /// Upload an image and return the reference to store on the record.
    async fn upload_image(&self, entity: &EntityDescriptor, image: PendingImage)
    -> AppResult<String>;
}
