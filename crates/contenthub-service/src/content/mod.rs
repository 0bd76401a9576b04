//! Generic content CRUD over the entity catalog.

pub mod query;
pub mod service;

pub use query::{BuiltQuery, ListParams, build_query};
pub use service::{ContentService, ListResult};
