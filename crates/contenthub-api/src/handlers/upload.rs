//! Image upload handler.

use axum::Json;
use axum::extract::{Extension, Multipart, State};

use contenthub_core::error::AppError;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::{AdminSession, Entity};
use crate::state::AppState;

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// POST /api/{entity}/upload
///
/// Accepts a single file field. The image is validated and stored before
/// its URL is returned; the caller writes that URL onto the record.
pub async fn upload(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    admin: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) && field.file_name().is_none() {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let stored = state
            .uploads
            .upload_image(entity.path, &file_name, content_type.as_deref(), data)
            .await?;
        tracing::info!(entity = entity.path, admin = admin.username(), url = %stored.url, "Image uploaded");

        return Ok(Json(UploadResponse {
            success: true,
            image_url: stored.url,
        }));
    }
    Err(AppError::validation("No file uploaded").into())
}
