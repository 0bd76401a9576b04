//! The generic content service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::{Document, DocumentQuery, Fields, Pagination};
use contenthub_entity::{EntityDescriptor, UniqueScope, WriteMode};

use super::query::{ListParams, build_query};
use crate::context::RequestContext;
use crate::projection::project;
use crate::repository::EntityRepository;

/// One page (or all) of a listing, already projected into the request locale.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// Projected documents.
    pub data: Vec<Value>,
    /// Number of documents in `data`.
    pub count: usize,
    /// Envelope for paginated listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// CRUD for every catalog entity.
#[derive(Debug, Clone)]
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

fn into_fields(body: Value) -> AppResult<Fields> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::validation("request body must be a JSON object")),
    }
}

fn not_found(descriptor: &EntityDescriptor) -> AppError {
    AppError::not_found(format!("{} item not found", descriptor.label))
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn repository(&self, descriptor: &EntityDescriptor, include_categories: bool) -> EntityRepository {
        EntityRepository::for_entity(Arc::clone(&self.store), descriptor, include_categories)
    }

    /// List documents with filters and optional pagination.
    pub async fn list(
        &self,
        descriptor: &EntityDescriptor,
        params: &ListParams,
        ctx: &RequestContext,
    ) -> AppResult<ListResult> {
        let built = build_query(params, descriptor, ctx)?;
        let repo = self.repository(descriptor, built.include_categories);
        let docs = repo
            .find(
                &built.query,
                &descriptor.sort_fields(),
                built.skip(),
                built.limit(),
            )
            .await?;
        let pagination = match built.page {
            Some(page) => Some(Pagination::new(page, repo.count(&built.query).await?)),
            None => None,
        };
        let data: Vec<Value> = docs
            .iter()
            .map(|d| project(d, descriptor.schema, ctx.locale))
            .collect();
        Ok(ListResult {
            count: data.len(),
            data,
            pagination,
        })
    }

    /// A single document. Inactive documents are hidden from the public.
    pub async fn get(
        &self,
        descriptor: &EntityDescriptor,
        id: &str,
        ctx: &RequestContext,
    ) -> AppResult<Value> {
        let doc = self
            .repository(descriptor, false)
            .find_by_id(id)
            .await?
            .filter(|d| ctx.is_admin() || d.get_bool("isActive") == Some(true))
            .ok_or_else(|| not_found(descriptor))?;
        Ok(project(&doc, descriptor.schema, ctx.locale))
    }

    /// A single document by its lookup attribute (e.g. a service slug).
    pub async fn get_by_lookup(
        &self,
        descriptor: &EntityDescriptor,
        value: &str,
        ctx: &RequestContext,
    ) -> AppResult<Value> {
        let field = descriptor
            .lookup_field
            .ok_or_else(|| not_found(descriptor))?;
        let mut query = DocumentQuery::all().eq(field, value);
        if !ctx.is_admin() {
            query = query.eq("isActive", true);
        }
        let doc = self
            .repository(descriptor, false)
            .find(&query, &descriptor.sort_fields(), 0, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| not_found(descriptor))?;
        Ok(project(&doc, descriptor.schema, ctx.locale))
    }

    /// Validate and insert a document.
    pub async fn create(
        &self,
        descriptor: &EntityDescriptor,
        body: Value,
        ctx: &RequestContext,
    ) -> AppResult<Value> {
        let fields =
            descriptor
                .schema
                .prepare(into_fields(body)?, WriteMode::Create, descriptor.validator)?;
        let repo = self.repository(descriptor, false);
        self.check_unique(descriptor, &repo, None, &fields).await?;

        let id = repo.insert(fields).await?;
        let doc = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted document vanished"))?;
        info!(entity = descriptor.path, id = %id, "Created content item");
        Ok(project(&doc, descriptor.schema, ctx.locale))
    }

    /// Validate and apply a partial update.
    pub async fn update(
        &self,
        descriptor: &EntityDescriptor,
        id: &str,
        body: Value,
        ctx: &RequestContext,
    ) -> AppResult<Value> {
        let patch =
            descriptor
                .schema
                .prepare(into_fields(body)?, WriteMode::Update, descriptor.validator)?;
        let repo = self.repository(descriptor, false);
        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(descriptor))?;
        self.check_unique(descriptor, &repo, Some(&existing), &patch)
            .await?;

        let doc = repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(descriptor))?;
        info!(entity = descriptor.path, id, "Updated content item");
        Ok(project(&doc, descriptor.schema, ctx.locale))
    }

    /// Hard-delete a document.
    pub async fn delete(&self, descriptor: &EntityDescriptor, id: &str) -> AppResult<()> {
        if !self.repository(descriptor, false).delete(id).await? {
            return Err(not_found(descriptor));
        }
        info!(entity = descriptor.path, id, "Deleted content item");
        Ok(())
    }

    /// Reject a write that would make a unique key repeat.
    ///
    /// `fields` is the full document on create and the patch on update; on
    /// update the key is checked against the merged result whenever the
    /// patch touches the key or, for active-only keys, `isActive`.
    async fn check_unique(
        &self,
        descriptor: &EntityDescriptor,
        repo: &EntityRepository,
        existing: Option<&Document>,
        fields: &Fields,
    ) -> AppResult<()> {
        for key in descriptor.unique {
            let touches_key = fields.contains_key(key.field)
                || (key.scope == UniqueScope::ActiveOnly && fields.contains_key("isActive"));
            if existing.is_some() && !touches_key {
                continue;
            }
            let merged = |name: &str| {
                fields
                    .get(name)
                    .or_else(|| existing.and_then(|d| d.get(name)))
                    .cloned()
            };
            let Some(value) = merged(key.field).filter(|v| !v.is_null()) else {
                continue;
            };
            let mut query = DocumentQuery::all().eq(key.field, value.clone());
            if key.scope == UniqueScope::ActiveOnly {
                if merged("isActive") != Some(Value::Bool(true)) {
                    continue;
                }
                query = query.eq("isActive", true);
            }
            if let Some(doc) = existing {
                query = query.id_not(doc.id.clone());
            }
            if repo.count(&query).await? > 0 {
                let shown = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
                return Err(AppError::conflict(format!(
                    "{} \"{shown}\" already exists",
                    key.field
                )));
            }
        }
        Ok(())
    }
}
