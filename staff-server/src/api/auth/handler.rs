//! Authentication handlers: register, login, own profile

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::CurrentUser;
use crate::auth::jwt;
use crate::db::models::AccountCreate;
use crate::db::repository::{AccountRepository, account::EmployeeProvision};
use crate::error::AppError;
use crate::state::AppState;
use crate::util::verify_password;

use super::super::{ApiJson, ApiResult};

/// POST /auth/register
///
/// Self-registration always yields an employee-role account. Supplying
/// `name`, `hire_date` and `salary` provisions a linked employee record in
/// the same transaction.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub hire_date: Option<String>,
    pub salary: Option<f64>,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let provision = match (req.name, req.hire_date, req.salary) {
        (None, None, None) => None,
        (Some(name), Some(hire_date), Some(salary)) => Some(EmployeeProvision {
            name,
            hire_date,
            salary,
        }),
        _ => {
            return Err(AppError::validation(
                "Employee provisioning requires name, hire_date and salary",
            ));
        }
    };

    let repo = AccountRepository::new(state.pool.clone());
    let account = repo
        .register(
            AccountCreate {
                username: req.username,
                email: req.email,
                password: req.password,
                // Self-registration never grants admin.
                role: None,
            },
            provision,
        )
        .await?;

    tracing::info!(account_id = %account.id, username = %account.username, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully", "user": account })),
    ))
}

/// POST /auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let account = repo.find_by_email(&req.email).await?;

    // One unified failure for unknown email, wrong password and disabled
    // accounts: no credential oracle.
    let account = match account {
        Some(a) if a.is_active => a,
        _ => {
            tracing::warn!(email = %req.email, "login failed");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(&req.password, &account.hashed_password) {
        tracing::warn!(account_id = %account.id, "login failed - bad password");
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::create_token(&account.id, account.role, &state.jwt_secret)
        .map_err(|e| AppError::database(format!("Failed to issue token: {e}")))?;

    tracing::info!(account_id = %account.id, role = %account.role, "login successful");

    Ok(Json(json!({ "message": "Login successful", "token": token })))
}

/// GET /auth/me — the caller's own profile, keyed by token identity
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Value> {
    let repo = AccountRepository::new(state.pool.clone());
    let account = repo
        .find_by_id(&user.account_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(json!({
        "user": {
            "id": account.id,
            "username": account.username,
            "email": account.email,
            "role": account.role,
        }
    })))
}
