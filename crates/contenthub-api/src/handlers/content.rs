//! Generic content handlers, shared by every catalog entity.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use contenthub_service::ListParams;

use crate::dto::response::{ApiResponse, ListResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AdminSession, Caller, Entity, JsonBody};
use crate::state::AppState;

/// GET /api/{entity}
pub async fn list(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    caller: Caller,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let result = state.content.list(entity, &params, &caller).await?;
    Ok(Json(ListResponse::ok(result)))
}

/// GET /api/{entity}/{id}
pub async fn get(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let item = state.content.get(entity, &id, &caller).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// GET /api/services/slug/{slug}
pub async fn get_by_lookup(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    caller: Caller,
    Path(value): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let item = state.content.get_by_lookup(entity, &value, &caller).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/{entity}
pub async fn create(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    admin: AdminSession,
    JsonBody(body): JsonBody<Value>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), ApiError> {
    let item = state.content.create(entity, body, &admin).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/{entity}/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    admin: AdminSession,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let item = state.content.update(entity, &id, body, &admin).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/{entity}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(Entity(entity)): Extension<Entity>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.content.delete(entity, &id).await?;
    tracing::debug!(entity = entity.path, id, admin = admin.username(), "Delete confirmed");
    Ok(Json(MessageResponse::ok(format!(
        "{} item deleted successfully",
        entity.label
    ))))
}
