//! Singleton settings pages.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::{Document, DocumentQuery, Fields, Locale};
use contenthub_entity::catalog::{SETTINGS_COLLECTION, SETTINGS_KEY_FIELD};
use contenthub_entity::{SettingsDescriptor, WriteMode};

use crate::projection::{localize_fields, project};
use crate::repository::EntityRepository;

/// Reads and upserts settings documents, one per page.
#[derive(Debug, Clone)]
pub struct SettingsService {
    store: Arc<dyn DocumentStore>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn repository(&self, descriptor: &SettingsDescriptor) -> EntityRepository {
        EntityRepository::new(
            Arc::clone(&self.store),
            SETTINGS_COLLECTION,
            DocumentQuery::all().eq(SETTINGS_KEY_FIELD, descriptor.key),
        )
    }

    async fn current(&self, repo: &EntityRepository) -> AppResult<Option<Document>> {
        Ok(repo
            .find(&DocumentQuery::all(), &[], 0, Some(1))
            .await?
            .into_iter()
            .next())
    }

    /// The stored page, or the schema's initial values if none was saved yet.
    pub async fn get(&self, descriptor: &SettingsDescriptor, locale: Locale) -> AppResult<Value> {
        match self.current(&self.repository(descriptor)).await? {
            Some(doc) => Ok(project(&doc, descriptor.schema, locale)),
            None => {
                let mut fields = descriptor.schema.initial_values();
                fields.insert(SETTINGS_KEY_FIELD.to_string(), Value::from(descriptor.key));
                localize_fields(&mut fields, descriptor.schema, locale);
                Ok(Value::Object(fields))
            }
        }
    }

    /// Replace the fields present in `body`, creating the page on first save.
    pub async fn upsert(
        &self,
        descriptor: &SettingsDescriptor,
        body: Value,
        locale: Locale,
    ) -> AppResult<Value> {
        let Value::Object(raw) = body else {
            return Err(AppError::validation("request body must be a JSON object"));
        };
        let repo = self.repository(descriptor);
        let existing = self.current(&repo).await?;
        let mode = if existing.is_some() {
            WriteMode::Update
        } else {
            WriteMode::Create
        };
        let mut fields: Fields = descriptor.schema.prepare(raw, mode, None)?;
        fields.insert(SETTINGS_KEY_FIELD.to_string(), Value::from(descriptor.key));

        let doc = match existing {
            Some(doc) => repo.update(&doc.id, fields).await?,
            None => {
                let id = repo.insert(fields).await?;
                repo.find_by_id(&id).await?
            }
        }
        .ok_or_else(|| AppError::internal("Settings document vanished"))?;
        info!(page = descriptor.path, "Saved settings");
        Ok(project(&doc, descriptor.schema, locale))
    }
}
