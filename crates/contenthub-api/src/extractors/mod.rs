//! Custom Axum extractors.

pub mod auth;
pub mod entity;
pub mod json;

pub use auth::{AdminSession, Caller};
pub use entity::{Entity, SettingsPage};
pub use json::JsonBody;
