//! Employee API handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::auth::{CurrentUser, Role, authorize};
use crate::db::models::{EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::error::AppError;
use crate::state::AppState;

use super::super::{ApiJson, ApiQuery, ApiResult, PageQuery};

const READ_ROLES: &[Role] = &[Role::Admin, Role::Employee];

/// GET /employees — page of active employees
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    authorize(user.role, READ_ROLES)?;
    let repo = EmployeeRepository::new(state.pool.clone());
    let (items, count) = repo.list(page.page, page.limit).await?;
    Ok(Json(json!({ "items": items, "count": count })))
}

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    authorize(user.role, READ_ROLES)?;
    let repo = EmployeeRepository::new(state.pool.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(json!({ "employee": employee })))
}

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeeCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let repo = EmployeeRepository::new(state.pool.clone());
    let employee = repo.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Employee created successfully", "employee": employee })),
    ))
}

/// PUT /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<EmployeeUpdate>,
) -> ApiResult<Value> {
    let repo = EmployeeRepository::new(state.pool.clone());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(json!({ "employee": employee })))
}

/// PUT /employees/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let repo = EmployeeRepository::new(state.pool.clone());
    repo.deactivate(&id).await?;
    Ok(Json(json!({ "message": "Employee deactivated successfully" })))
}

/// DELETE /employees/{id} — hard delete, blocked while requests reference it
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let repo = EmployeeRepository::new(state.pool.clone());
    repo.delete(&id).await?;
    Ok(Json(json!({ "message": "Employee deleted successfully" })))
}
