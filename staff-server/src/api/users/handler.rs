//! User (account) API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::Role;
use crate::db::models::{AccountCreate, AccountUpdate};
use crate::db::repository::AccountRepository;
use crate::error::AppError;
use crate::state::AppState;

use super::super::{ApiJson, ApiQuery, ApiResult, PageQuery};

/// GET /users — page of active accounts
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let (items, count) = repo.list(page.page, page.limit).await?;
    Ok(Json(json!({ "items": items, "count": count })))
}

/// GET /users/available — active employee-role accounts with no employee record
pub async fn available(State(state): State<AppState>) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let items = repo.list_available().await?;
    Ok(Json(json!({ "items": items })))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let account = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(json!({ "user": account })))
}

/// POST /users — admin-created account, any role
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AccountCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repo = AccountRepository::new(state.pool.clone());
    let account = repo.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully", "user": account })),
    ))
}

/// PUT /users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<AccountUpdate>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let account = repo.update(&id, payload).await?;
    Ok(Json(json!({ "user": account })))
}

/// PUT /users/{id}/role
///
/// The role arrives as a plain string so an unrecognized value maps to a
/// 400 with a clear message instead of a generic body-rejection.
#[derive(Debug, Deserialize)]
pub struct RoleUpdateRequest {
    pub role: String,
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<RoleUpdateRequest>,
) -> ApiResult<Value> {
    let role = Role::parse(&payload.role)
        .ok_or_else(|| AppError::validation("Invalid role provided."))?;

    let repo = AccountRepository::new(state.pool.clone());
    let account = repo.update_role(&id, role).await?;
    Ok(Json(
        json!({ "message": "User role updated successfully", "user": account }),
    ))
}

/// PUT /users/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    repo.deactivate(&id).await?;
    Ok(Json(json!({ "message": "User deactivated successfully" })))
}

/// DELETE /users/{id} — hard delete
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    repo.delete(&id).await?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
