//! HTTP request handlers.

pub mod auth;
pub mod content;
pub mod health;
pub mod settings;
pub mod upload;
