//! Collaborator traits defined in `contenthub-core` and implemented by other crates.

pub mod document_store;
pub mod image_host;

pub use document_store::DocumentStore;
pub use image_host::{ImageHost, ImageUpload, StoredImage};
