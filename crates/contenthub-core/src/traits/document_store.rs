//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::document::{Document, Fields, NewDocument};
use crate::types::query::DocumentQuery;
use crate::types::sorting::SortField;

/// A collection-oriented document store.
///
/// Implementations exist for PostgreSQL (JSONB rows) and process memory.
/// A store executes queries; it never decides what a query means for an
/// entity, and it never stamps timestamps itself.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "postgres", "memory").
    fn provider_type(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Find documents matching `query`, ordered by `sort`, skipping `skip`
    /// and returning at most `limit` (all when `None`).
    async fn find(
        &self,
        collection: &str,
        query: &DocumentQuery,
        sort: &[SortField],
        skip: u64,
        limit: Option<u64>,
    ) -> AppResult<Vec<Document>>;

    /// Find a document by id. Unknown or malformed ids yield `None`.
    async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>>;

    /// Count documents matching `query`.
    async fn count(&self, collection: &str, query: &DocumentQuery) -> AppResult<u64>;

    /// Insert a document and return its new id.
    async fn insert(&self, collection: &str, doc: NewDocument) -> AppResult<String>;

    /// Replace the attributes named in `patch` in a single write and set
    /// `updated_at`. Returns the updated document, or `None` if no document
    /// has this id.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Fields,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Document>>;

    /// Delete a document. Returns `true` if a document was removed.
    async fn delete(&self, collection: &str, id: &str) -> AppResult<bool>;
}
