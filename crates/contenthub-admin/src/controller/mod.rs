//! The generic CRUD controller behind every admin content screen.
//!
//! One controller instance owns one entity screen. It transitions only on
//! discrete calls, and every successful mutation re-fetches the full list
//! instead of merging the response.

pub mod state;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::types::Document;
use contenthub_entity::{Draft, EntityDescriptor, FieldKind};

use crate::client::{ContentClient, PendingImage};

pub use self::state::{ListState, ModalMode, ModalState};

/// Drives list, create, edit, and delete for one catalog entity.
#[derive(Debug)]
pub struct CrudController {
    client: Arc<dyn ContentClient>,
    entity: &'static EntityDescriptor,
    list: ListState,
    list_error: Option<String>,
    modal: ModalState,
    pending_images: HashMap<String, PendingImage>,
    pending_delete: Option<String>,
}

impl CrudController {
    /// A controller with an empty, idle list and no form open.
    pub fn new(client: Arc<dyn ContentClient>, entity: &'static EntityDescriptor) -> Self {
        Self {
            client,
            entity,
            list: ListState::Idle(Vec::new()),
            list_error: None,
            modal: ModalState::Closed,
            pending_images: HashMap::new(),
            pending_delete: None,
        }
    }

    /// The entity this screen edits.
    pub fn entity(&self) -> &'static EntityDescriptor {
        self.entity
    }

    /// The list state.
    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Items currently shown.
    pub fn items(&self) -> &[Document] {
        self.list.items()
    }

    /// Message of the last failed list fetch or delete.
    pub fn list_error(&self) -> Option<&str> {
        self.list_error.as_deref()
    }

    /// The form state.
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Id awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Whether an image field has a picked file that is not uploaded yet.
    pub fn has_pending_image(&self, field: &str) -> bool {
        self.pending_images.contains_key(field)
    }

    /// Fetch the full list. On failure the previous items stay visible.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let previous = match std::mem::replace(&mut self.list, ListState::Loading) {
            ListState::Idle(items) => items,
            ListState::Loading => Vec::new(),
        };
        match self.client.list(self.entity).await {
            Ok(items) => {
                debug!(entity = self.entity.path, count = items.len(), "List refreshed");
                self.list = ListState::Idle(items);
                self.list_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(entity = self.entity.path, error = %e, "List refresh failed");
                self.list = ListState::Idle(previous);
                self.list_error = Some(e.message.clone());
                Err(e)
            }
        }
    }

    /// Open an empty form seeded with the schema's initial values.
    pub fn open_create(&mut self) -> AppResult<()> {
        self.open(ModalMode::Create, Draft::new(self.entity.schema))
    }

    /// Open a form seeded from the listed item `id`.
    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        let doc = self
            .items()
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("{} item not found", self.entity.label)))?;
        let draft = Draft::from_document(self.entity.schema, doc);
        self.open(ModalMode::Edit(id.to_string()), draft)
    }

    fn open(&mut self, mode: ModalMode, draft: Draft) -> AppResult<()> {
        if self.modal.is_open() {
            return Err(AppError::validation("A form is already open"));
        }
        self.pending_images.clear();
        self.modal = ModalState::Open {
            mode,
            draft,
            error: None,
        };
        Ok(())
    }

    /// Close the form, discarding the draft and any picked files.
    pub fn close(&mut self) {
        if let ModalState::Open { .. } = self.modal {
            self.modal = ModalState::Closed;
            self.pending_images.clear();
        }
    }

    fn open_draft(&mut self) -> AppResult<&mut Draft> {
        match &mut self.modal {
            ModalState::Open { draft, .. } => Ok(draft),
            _ => Err(AppError::validation("No form is open")),
        }
    }

    /// Edit one field of the open form; derived fields follow.
    pub fn set_field(&mut self, name: &str, value: Value) -> AppResult<()> {
        self.open_draft()?.set(name, value)
    }

    /// Pick a file for an image field. The upload happens on submit.
    pub fn attach_image(
        &mut self,
        field: &str,
        image: PendingImage,
        preview: impl Into<String>,
    ) -> AppResult<()> {
        let draft = self.open_draft()?;
        if draft.schema().field(field).map(|f| f.kind) != Some(FieldKind::Image) {
            return Err(AppError::validation(format!("{field} is not an image field")));
        }
        draft.set_preview(field, preview);
        self.pending_images.insert(field.to_string(), image);
        Ok(())
    }

    /// Upload picked images, then create or update.
    ///
    /// Uploads are awaited one by one before the write; any failure aborts
    /// the save and reopens the form with the draft and the remaining
    /// picked files intact. On success the form closes and the list is
    /// re-fetched.
    pub async fn submit(&mut self) -> AppResult<Document> {
        match std::mem::replace(&mut self.modal, ModalState::Closed) {
            ModalState::Open { mode, draft, .. } => {
                self.modal = ModalState::Submitting { mode, draft };
            }
            other => {
                self.modal = other;
                return Err(AppError::validation("No form is open"));
            }
        }

        let result = self.save().await;

        let ModalState::Submitting { mode, draft } =
            std::mem::replace(&mut self.modal, ModalState::Closed)
        else {
            return Err(AppError::internal("Form left the submitting state"));
        };

        match result {
            Ok(doc) => {
                self.pending_images.clear();
                if let Err(e) = self.refresh().await {
                    debug!(error = %e, "Saved, but the list could not be re-fetched");
                }
                Ok(doc)
            }
            Err(e) => {
                self.modal = ModalState::Open {
                    mode,
                    draft,
                    error: Some(e.message.clone()),
                };
                Err(e)
            }
        }
    }

    async fn save(&mut self) -> AppResult<Document> {
        let ModalState::Submitting { mode, draft } = &mut self.modal else {
            return Err(AppError::internal("Form is not submitting"));
        };

        let mut fields: Vec<String> = self.pending_images.keys().cloned().collect();
        fields.sort();
        for field in fields {
            let Some(image) = self.pending_images.get(&field).cloned() else {
                continue;
            };
            let url = self.client.upload_image(self.entity, image).await?;
            draft.set_image(&field, url)?;
            self.pending_images.remove(&field);
        }

        let patch = draft.to_patch();
        match mode {
            ModalMode::Create => self.client.create(self.entity, patch).await,
            ModalMode::Edit(id) => self.client.update(self.entity, id, patch).await,
        }
    }

    /// Ask to delete a listed item. Nothing happens until confirmed.
    pub fn request_delete(&mut self, id: &str) -> AppResult<()> {
        if !self.items().iter().any(|d| d.id == id) {
            return Err(AppError::not_found(format!(
                "{} item not found",
                self.entity.label
            )));
        }
        self.pending_delete = Some(id.to_string());
        Ok(())
    }

    /// Drop the pending delete request.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the item awaiting confirmation, then re-fetch the list.
    pub async fn confirm_delete(&mut self) -> AppResult<()> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::validation("No delete is pending"))?;
        if let Err(e) = self.client.delete(self.entity, &id).await {
            self.list_error = Some(e.message.clone());
            return Err(e);
        }
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use chrono::Utc;
    use contenthub_core::error::ErrorKind;
    use contenthub_core::types::Fields;
    use contenthub_entity::catalog::SERVICES;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MockClient {
        docs: Mutex<Vec<Document>>,
        calls: Mutex<Vec<String>>,
        fail_upload: bool,
    }

    impl MockClient {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn seed(&self, id: &str, fields: Value) {
            let Value::Object(fields) = fields else {
                panic!("expected object");
            };
            self.docs.lock().unwrap().push(Document {
                id: id.to_string(),
                fields,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }

        fn slug_taken(&self, fields: &Fields, except: Option<&str>) -> bool {
            let slug = fields.get("slug");
            self.docs
                .lock()
                .unwrap()
                .iter()
                .any(|d| Some(d.id.as_str()) != except && d.get("slug") == slug)
        }
    }

    #[async_trait]
    impl ContentClient for MockClient {
        async fn list(&self, _entity: &EntityDescriptor) -> AppResult<Vec<Document>> {
            self.record("list");
            Ok(self.docs.lock().unwrap().clone())
        }

        async fn create(&self, _entity: &EntityDescriptor, fields: Fields) -> AppResult<Document> {
            self.record("create");
            if self.slug_taken(&fields, None) {
                return Err(AppError::conflict("slug already exists"));
            }
            let id = format!("doc-{}", self.docs.lock().unwrap().len() + 1);
            self.seed(&id, Value::Object(fields));
            let docs = self.docs.lock().unwrap();
            Ok(docs.last().cloned().unwrap())
        }

        async fn update(
            &self,
            _entity: &EntityDescriptor,
            id: &str,
            fields: Fields,
        ) -> AppResult<Document> {
            self.record(format!("update {id}"));
            if self.slug_taken(&fields, Some(id)) {
                return Err(AppError::conflict("slug already exists"));
            }
            let mut docs = self.docs.lock().unwrap();
            let doc = docs
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| AppError::not_found("missing"))?;
            doc.fields.extend(fields);
            Ok(doc.clone())
        }

        async fn delete(&self, _entity: &EntityDescriptor, id: &str) -> AppResult<()> {
            self.record(format!("delete {id}"));
            self.docs.lock().unwrap().retain(|d| d.id != id);
            Ok(())
        }

        async fn upload_image(
            &self,
            _entity: &EntityDescriptor,
            image: PendingImage,
        ) -> AppResult<String> {
            self.record(format!("upload {}", image.file_name));
            if self.fail_upload {
                return Err(AppError::external_service("image host down"));
            }
            Ok(format!("/uploads/services/{}", image.file_name))
        }
    }

    fn png() -> PendingImage {
        PendingImage {
            file_name: "cover.png".into(),
            content_type: "image/png".into(),
            data: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
        }
    }

    fn controller(client: &Arc<MockClient>) -> CrudController {
        CrudController::new(Arc::clone(client) as Arc<dyn ContentClient>, &SERVICES)
    }

    #[tokio::test]
    async fn test_create_seeds_initial_values_and_refetches() {
        let client = Arc::new(MockClient::default());
        let mut ctl = controller(&client);

        ctl.open_create().unwrap();
        let draft = ctl.modal().draft().unwrap();
        assert_eq!(draft.get("isActive"), Some(&json!(true)));
        assert_eq!(draft.get("order"), Some(&json!(0)));

        ctl.set_field("nameEn", json!("Wedding & Co.")).unwrap();
        assert_eq!(
            ctl.modal().draft().unwrap().get("slug"),
            Some(&json!("wedding-co"))
        );

        let created = ctl.submit().await.unwrap();
        assert_eq!(created.get_str("slug"), Some("wedding-co"));
        assert!(matches!(ctl.modal(), ModalState::Closed));
        assert_eq!(ctl.items().len(), 1);
        assert_eq!(client.calls(), vec!["create", "list"]);
    }

    #[tokio::test]
    async fn test_conflict_keeps_draft_and_error() {
        let client = Arc::new(MockClient::default());
        client.seed("s1", json!({ "nameEn": "Weddings", "slug": "weddings" }));
        let mut ctl = controller(&client);
        ctl.refresh().await.unwrap();

        ctl.open_create().unwrap();
        ctl.set_field("nameEn", json!("Weddings")).unwrap();
        let err = ctl.submit().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        match ctl.modal() {
            ModalState::Open { mode, draft, error } => {
                assert_eq!(*mode, ModalMode::Create);
                assert_eq!(draft.get("nameEn"), Some(&json!("Weddings")));
                assert_eq!(error.as_deref(), Some("slug already exists"));
            }
            other => panic!("unexpected modal state: {other:?}"),
        }
        assert_eq!(ctl.items().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_upload_aborts_save() {
        let client = Arc::new(MockClient {
            fail_upload: true,
            ..Default::default()
        });
        let mut ctl = controller(&client);

        ctl.open_create().unwrap();
        ctl.set_field("nameEn", json!("Birthdays")).unwrap();
        ctl.attach_image("image", png(), "blob:cover").unwrap();

        assert!(ctl.submit().await.is_err());
        assert_eq!(client.calls(), vec!["upload cover.png"]);
        assert!(ctl.has_pending_image("image"));
        let draft = ctl.modal().draft().unwrap();
        assert_eq!(draft.preview("image"), Some("blob:cover"));
        assert_eq!(ctl.modal().error(), Some("image host down"));
    }

    #[tokio::test]
    async fn test_upload_completes_before_write() {
        let client = Arc::new(MockClient::default());
        let mut ctl = controller(&client);

        ctl.open_create().unwrap();
        ctl.set_field("nameEn", json!("Birthdays")).unwrap();
        ctl.attach_image("image", png(), "blob:cover").unwrap();
        let created = ctl.submit().await.unwrap();

        assert_eq!(created.get_str("image"), Some("/uploads/services/cover.png"));
        assert_eq!(client.calls(), vec!["upload cover.png", "create", "list"]);
        assert!(!ctl.has_pending_image("image"));
    }

    #[tokio::test]
    async fn test_attach_image_rejects_non_image_field() {
        let client = Arc::new(MockClient::default());
        let mut ctl = controller(&client);
        ctl.open_create().unwrap();
        assert!(ctl.attach_image("nameEn", png(), "blob:x").is_err());
    }

    #[tokio::test]
    async fn test_edit_seeds_from_item() {
        let client = Arc::new(MockClient::default());
        client.seed(
            "s1",
            json!({ "nameEn": "Weddings", "slug": "weddings", "isActive": false }),
        );
        let mut ctl = controller(&client);
        ctl.refresh().await.unwrap();

        ctl.open_edit("s1").unwrap();
        assert_eq!(
            ctl.modal().draft().unwrap().get("isActive"),
            Some(&json!(false))
        );
        ctl.set_field("nameAr", json!("حفلات الزفاف")).unwrap();
        let updated = ctl.submit().await.unwrap();
        assert_eq!(updated.get_str("nameAr"), Some("حفلات الزفاف"));
        assert_eq!(client.calls(), vec!["list", "update s1", "list"]);
    }

    #[tokio::test]
    async fn test_one_form_at_a_time() {
        let client = Arc::new(MockClient::default());
        let mut ctl = controller(&client);
        ctl.open_create().unwrap();
        assert!(ctl.open_create().is_err());
        ctl.close();
        assert!(!ctl.modal().is_open());
        assert!(ctl.set_field("nameEn", json!("x")).is_err());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let client = Arc::new(MockClient::default());
        client.seed("s1", json!({ "nameEn": "Weddings", "slug": "weddings" }));
        let mut ctl = controller(&client);
        ctl.refresh().await.unwrap();

        ctl.request_delete("s1").unwrap();
        assert_eq!(ctl.pending_delete(), Some("s1"));
        ctl.cancel_delete();
        assert!(ctl.confirm_delete().await.is_err());
        assert_eq!(client.calls(), vec!["list"]);

        ctl.request_delete("s1").unwrap();
        ctl.confirm_delete().await.unwrap();
        assert!(ctl.items().is_empty());
        assert_eq!(client.calls(), vec!["list", "delete s1", "list"]);
        assert!(ctl.request_delete("missing").is_err());
    }
}
