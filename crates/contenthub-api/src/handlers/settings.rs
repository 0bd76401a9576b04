//! Settings singleton handlers.

use axum::Json;
use axum::extract::{Extension, State};
use serde_json::Value;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AdminSession, Caller, JsonBody, SettingsPage};
use crate::state::AppState;

/// GET /api/{page}
pub async fn get(
    State(state): State<AppState>,
    Extension(SettingsPage(page)): Extension<SettingsPage>,
    caller: Caller,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let data = state.settings.get(page, caller.locale).await?;
    Ok(Json(ApiResponse::ok(data)))
}

/// PUT /api/{page}
pub async fn upsert(
    State(state): State<AppState>,
    Extension(SettingsPage(page)): Extension<SettingsPage>,
    admin: AdminSession,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let data = state.settings.upsert(page, body, admin.locale).await?;
    Ok(Json(ApiResponse::ok(data)))
}
