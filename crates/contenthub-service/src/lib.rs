//! # contenthub-service
//!
//! Business logic for ContentHub. Services are generic over the entity
//! catalog: one [`ContentService`] serves every content type by reading its
//! [`EntityDescriptor`](contenthub_entity::EntityDescriptor).
//!
//! Services follow constructor injection; collaborators are handed in as
//! `Arc` trait objects at construction time.

pub mod content;
pub mod context;
pub mod projection;
pub mod repository;
pub mod settings;
pub mod upload;

pub use content::{BuiltQuery, ContentService, ListParams, ListResult, build_query};
pub use context::RequestContext;
pub use repository::EntityRepository;
pub use settings::SettingsService;
pub use upload::UploadService;
