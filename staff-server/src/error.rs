//! Unified API error type
//!
//! Every failure leaving the service is a JSON object with a single `error`
//! key holding a human-readable message. Status codes follow the taxonomy:
//! 401 for authentication, 403 for authorization, 404 for missing rows,
//! 400 for validation failures and store errors.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::repository::RepoError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, malformed or expired bearer token (401).
    #[error("Please authenticate")]
    Unauthenticated,

    /// Bad login credentials or inactive account (401).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated but the caller's role is not in the allowed set (403).
    #[error("Access denied")]
    AccessDenied,

    /// Lookup by id did not resolve, or the row is filtered out (404).
    #[error("{0}")]
    NotFound(String),

    /// Validation failure, duplicate unique field, malformed date (400).
    #[error("{0}")]
    Validation(String),

    /// Unexpected store failure, surfaced with the underlying message (400).
    #[error("{0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(msg) = &self {
            tracing::error!(error = %msg, "store error surfaced to client");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) | RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(AppError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::AccessDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::not_found("User not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("Username already exists").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::database("disk I/O error").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn repo_errors_map_onto_api_errors() {
        let e: AppError = RepoError::NotFound("Employee not found".into()).into();
        assert!(matches!(e, AppError::NotFound(_)));

        let e: AppError = RepoError::Duplicate("Username already exists".into()).into();
        assert!(matches!(e, AppError::Validation(_)));

        let e: AppError = RepoError::Database("locked".into()).into();
        assert!(matches!(e, AppError::Database(_)));
    }
}
