//! In-process document store.
//!
//! Evaluates queries with [`DocumentQuery::matches`] and orders results the
//! way the PostgreSQL store does: JSON values by type then value, missing
//! values last, ties broken by id.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use contenthub_core::result::AppResult;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::{Document, DocumentQuery, Fields, NewDocument, SortField};

/// Document store kept in process memory, keyed by collection.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: DashMap<String, HashMap<String, Document>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(_) => 1,
        Value::Number(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn timestamp_of(doc: &Document, field: &str) -> Option<DateTime<Utc>> {
    match field {
        "createdAt" => Some(doc.created_at),
        "updatedAt" => Some(doc.updated_at),
        _ => None,
    }
}

fn compare_docs(a: &Document, b: &Document, sort: &[SortField]) -> Ordering {
    for key in sort {
        let ordering = match (timestamp_of(a, &key.field), timestamp_of(b, &key.field)) {
            (Some(x), Some(y)) => key.direction.apply(x.cmp(&y)),
            _ => {
                let x = a.get(&key.field).filter(|v| !v.is_null());
                let y = b.get(&key.field).filter(|v| !v.is_null());
                match (x, y) {
                    (Some(x), Some(y)) => key.direction.apply(compare_values(x, y)),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.id.cmp(&b.id)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn find(
        &self,
        collection: &str,
        query: &DocumentQuery,
        sort: &[SortField],
        skip: u64,
        limit: Option<u64>,
    ) -> AppResult<Vec<Document>> {
        let mut docs: Vec<Document> = self
            .collections
            .get(collection)
            .map(|docs| docs.values().filter(|d| query.matches(d)).cloned().collect())
            .unwrap_or_default();
        docs.sort_by(|a, b| compare_docs(a, b, sort));

        let docs = docs.into_iter().skip(usize::try_from(skip).unwrap_or(usize::MAX));
        Ok(match limit {
            Some(limit) => docs.take(limit as usize).collect(),
            None => docs.collect(),
        })
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).cloned()))
    }

    async fn count(&self, collection: &str, query: &DocumentQuery) -> AppResult<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.values().filter(|d| query.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn insert(&self, collection: &str, doc: NewDocument) -> AppResult<String> {
        let id = Uuid::now_v7().to_string();
        let document = Document {
            id: id.clone(),
            fields: doc.fields,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        };
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Fields,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Document>> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(doc) = docs.get_mut(id) else {
            return Ok(None);
        };
        doc.fields.extend(patch);
        doc.updated_at = updated_at;
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, collection: &str, id: &str) -> AppResult<bool> {
        Ok(self
            .collections
            .get_mut(collection)
            .is_some_and(|mut docs| docs.remove(id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        map
    }

    async fn seed(store: &MemoryDocumentStore, items: &[Value]) -> Vec<String> {
        let start = Utc::now();
        let mut ids = Vec::new();
        for (i, item) in items.iter().enumerate() {
            let at = start + Duration::seconds(i as i64);
            let id = store
                .insert("events", NewDocument::new(fields(item.clone()), at))
                .await
                .unwrap();
            ids.push(id);
        }
        ids
    }

    #[tokio::test]
    async fn test_insert_find_and_count() {
        let store = MemoryDocumentStore::new();
        seed(
            &store,
            &[
                json!({ "typeEn": "Wedding", "isActive": true }),
                json!({ "typeEn": "Birthday", "isActive": true }),
                json!({ "typeEn": "Wedding", "isActive": false }),
            ],
        )
        .await;

        let query = DocumentQuery::all().eq("typeEn", "Wedding");
        assert_eq!(store.count("events", &query).await.unwrap(), 2);
        let found = store.find("events", &query, &[], 0, None).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(store.count("stories", &query).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_default_sort_order_then_newest() {
        let store = MemoryDocumentStore::new();
        let ids = seed(
            &store,
            &[
                json!({ "order": 2 }),
                json!({ "order": 1 }),
                json!({ "order": 1 }),
                json!({}),
            ],
        )
        .await;
        let sort = [SortField::asc("order"), SortField::desc("createdAt")];
        let found = store
            .find("events", &DocumentQuery::all(), &sort, 0, None)
            .await
            .unwrap();
        let order: Vec<_> = found.iter().map(|d| d.id.clone()).collect();
        assert_eq!(order, vec![ids[2].clone(), ids[1].clone(), ids[0].clone(), ids[3].clone()]);
    }

    #[tokio::test]
    async fn test_skip_and_limit() {
        let store = MemoryDocumentStore::new();
        let items: Vec<Value> = (0..25).map(|i| json!({ "order": i })).collect();
        seed(&store, &items).await;
        let sort = [SortField::asc("order")];
        let page = store
            .find("events", &DocumentQuery::all(), &sort, 20, Some(10))
            .await
            .unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].get("order"), Some(&json!(20)));
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = MemoryDocumentStore::new();
        let ids = seed(&store, &[json!({ "titleEn": "Gala", "order": 1 })]).await;
        let later = Utc::now() + Duration::minutes(5);
        let updated = store
            .update("events", &ids[0], fields(json!({ "order": 3 })), later)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get("titleEn"), Some(&json!("Gala")));
        assert_eq!(updated.get("order"), Some(&json!(3)));
        assert_eq!(updated.updated_at, later);
        assert!(
            store
                .update("events", "missing", Fields::new(), later)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryDocumentStore::new();
        let ids = seed(&store, &[json!({})]).await;
        assert!(store.delete("events", &ids[0]).await.unwrap());
        assert!(!store.delete("events", &ids[0]).await.unwrap());
        assert!(store.find_by_id("events", &ids[0]).await.unwrap().is_none());
    }
}
