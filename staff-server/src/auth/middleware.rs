//! Authentication and role-gate middleware
//!
//! Two sequential gates: `require_auth` resolves the caller's identity from
//! the bearer token (401 on failure), then `require_admin` checks the
//! resolved role against the action's allowed set (403 on failure).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

use super::{Role, authorize, jwt};

/// Authenticated caller identity extracted from the JWT
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub account_id: String,
    pub role: Role,
}

/// Middleware that extracts and verifies the JWT from the Authorization header
///
/// On success a [`CurrentUser`] is inserted into the request extensions for
/// downstream handlers and role gates.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthenticated)?;

    let claims = jwt::decode_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AppError::Unauthenticated
    })?;

    let user = CurrentUser {
        account_id: claims.sub,
        role: claims.role,
    };
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Middleware restricting a route subtree to admin callers
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthenticated)?;

    if let Err(denied) = authorize(user.role, &[Role::Admin]) {
        tracing::warn!(
            account_id = %user.account_id,
            role = %user.role,
            path = %req.uri().path(),
            "access denied"
        );
        return Err(denied);
    }

    Ok(next.run(req).await)
}
