//! Request API handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::auth::{CurrentUser, Role, authorize};
use crate::db::models::{RequestCreate, RequestUpdate};
use crate::db::repository::RequestRepository;
use crate::error::AppError;
use crate::state::AppState;

use super::super::{ApiJson, ApiQuery, ApiResult, PageQuery};

const READ_ROLES: &[Role] = &[Role::Admin, Role::Employee];

/// GET /requests — page of active requests
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    authorize(user.role, READ_ROLES)?;
    let repo = RequestRepository::new(state.pool.clone());
    let (items, count) = repo.list(page.page, page.limit).await?;
    Ok(Json(json!({ "items": items, "count": count })))
}

/// GET /requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    authorize(user.role, READ_ROLES)?;
    let repo = RequestRepository::new(state.pool.clone());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Request not found"))?;
    Ok(Json(json!({ "request": request })))
}

/// POST /requests
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RequestCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repo = RequestRepository::new(state.pool.clone());
    let request = repo.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Request created successfully", "request": request })),
    ))
}

/// PUT /requests/{id} — active rows only
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<RequestUpdate>,
) -> ApiResult<Value> {
    let repo = RequestRepository::new(state.pool.clone());
    let request = repo.update(&id, payload).await?;
    Ok(Json(json!({ "request": request })))
}

/// PUT /requests/{id}/deactivate — active rows only
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let repo = RequestRepository::new(state.pool.clone());
    let request = repo.deactivate(&id).await?;
    Ok(Json(json!({ "request": request })))
}

/// DELETE /requests/{id} — hard delete, active rows only
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let repo = RequestRepository::new(state.pool.clone());
    repo.delete(&id).await?;
    Ok(Json(json!({ "message": "Request deleted successfully" })))
}
