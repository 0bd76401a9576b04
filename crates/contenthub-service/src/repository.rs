//! Entity repository adapter over a [`DocumentStore`].
//!
//! Binds a collection to a default query so that every read and write of an
//! entity stays on its side of a shared collection, and stamps audit
//! timestamps on the way in.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use contenthub_core::result::AppResult;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::{Document, DocumentQuery, Fields, NewDocument, SortField};
use contenthub_entity::EntityDescriptor;

/// Uniform CRUD access to one entity's documents.
#[derive(Debug, Clone)]
pub struct EntityRepository {
    store: Arc<dyn DocumentStore>,
    collection: &'static str,
    base: DocumentQuery,
}

impl EntityRepository {
    /// Repository over `collection`, restricted to documents matching `base`.
    pub fn new(store: Arc<dyn DocumentStore>, collection: &'static str, base: DocumentQuery) -> Self {
        Self {
            store,
            collection,
            base,
        }
    }

    /// Repository for an entity. `include_categories` widens an instance
    /// listing to the category documents sharing its collection.
    pub fn for_entity(
        store: Arc<dyn DocumentStore>,
        descriptor: &EntityDescriptor,
        include_categories: bool,
    ) -> Self {
        Self::new(
            store,
            descriptor.collection,
            descriptor.default_query(include_categories),
        )
    }

    fn scoped(&self, query: &DocumentQuery) -> DocumentQuery {
        self.base.clone().and(query.clone())
    }

    /// Documents matching `query`, in `sort` order.
    pub async fn find(
        &self,
        query: &DocumentQuery,
        sort: &[SortField],
        skip: u64,
        limit: Option<u64>,
    ) -> AppResult<Vec<Document>> {
        self.store
            .find(self.collection, &self.scoped(query), sort, skip, limit)
            .await
    }

    /// Number of documents matching `query`.
    pub async fn count(&self, query: &DocumentQuery) -> AppResult<u64> {
        self.store.count(self.collection, &self.scoped(query)).await
    }

    /// A document by id, if it belongs to this entity.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Document>> {
        let doc = self.store.find_by_id(self.collection, id).await?;
        Ok(doc.filter(|d| self.base.matches(d)))
    }

    /// Insert a document stamped with the current time and return its id.
    pub async fn insert(&self, fields: Fields) -> AppResult<String> {
        let id = self
            .store
            .insert(self.collection, NewDocument::new(fields, Utc::now()))
            .await?;
        debug!(collection = self.collection, id = %id, "Inserted document");
        Ok(id)
    }

    /// Apply `patch` in a single write and refresh `updatedAt`.
    ///
    /// Returns `None` when no document of this entity has the id.
    pub async fn update(&self, id: &str, patch: Fields) -> AppResult<Option<Document>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated = self
            .store
            .update(self.collection, id, patch, Utc::now())
            .await?;
        debug!(collection = self.collection, id, "Updated document");
        Ok(updated)
    }

    /// Hard-delete a document. Returns `false` when no document of this
    /// entity has the id.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let removed = self.store.delete(self.collection, id).await?;
        debug!(collection = self.collection, id, removed, "Deleted document");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contenthub_database::MemoryDocumentStore;
    use contenthub_entity::catalog;
    use serde_json::{Value, json};

    fn fields(value: Value) -> Fields {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        map
    }

    #[tokio::test]
    async fn test_shared_collection_is_split_by_discriminator() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let events = catalog::by_path("events").unwrap();
        let types = catalog::by_path("event-types").unwrap();
        let event_repo = EntityRepository::for_entity(store.clone(), events, false);
        let type_repo = EntityRepository::for_entity(store.clone(), types, false);

        let event_id = event_repo
            .insert(fields(json!({ "titleEn": "Gala", "isEventType": false })))
            .await
            .unwrap();
        let type_id = type_repo
            .insert(fields(json!({ "titleEn": "Wedding", "isEventType": true })))
            .await
            .unwrap();
        event_repo
            .insert(fields(json!({ "titleEn": "Legacy event" })))
            .await
            .unwrap();

        let all = DocumentQuery::all();
        assert_eq!(event_repo.count(&all).await.unwrap(), 2);
        assert_eq!(type_repo.count(&all).await.unwrap(), 1);
        assert!(event_repo.find_by_id(&type_id).await.unwrap().is_none());
        assert!(type_repo.update(&event_id, Fields::new()).await.unwrap().is_none());
        assert!(!type_repo.delete(&event_id).await.unwrap());

        let widened = EntityRepository::for_entity(store, events, true);
        assert_eq!(widened.count(&all).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_timestamps_are_stamped() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let repo = EntityRepository::new(store, "stories", DocumentQuery::all());
        let id = repo.insert(fields(json!({ "namesEn": "A & B" }))).await.unwrap();
        let created = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let updated = repo
            .update(&id, fields(json!({ "namesAr": "أ و ب" })))
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.get_str("namesEn"), Some("A & B"));
    }
}
