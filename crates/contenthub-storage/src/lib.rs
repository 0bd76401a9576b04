//! # contenthub-storage
//!
//! Image host implementations for ContentHub: a local directory served by
//! the API under `/uploads`, and a remote hosting service reached over
//! HTTP. Uploads are validated here before they reach any host.

pub mod manager;
pub mod providers;
pub mod validation;

pub use manager::ImageHostManager;
pub use validation::{ImageKind, validate_image};
