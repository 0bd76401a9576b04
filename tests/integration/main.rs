//! HTTP-level integration tests. Every test builds its own app over the
//! in-memory document store and a temp-dir image host.

mod helpers;

mod auth_test;
mod content_test;
mod events_test;
mod health_test;
mod settings_test;
mod upload_test;
