//! API routes
//!
//! Route tree and both gates are assembled here: public routes (health,
//! register, login) bypass authentication; everything else sits behind
//! [`require_auth`], and admin-only subtrees add [`require_admin`].

pub mod auth;
pub mod employees;
pub mod health;
pub mod requests;
pub mod users;

use axum::{
    Json, Router,
    extract::{FromRequest, FromRequestParts},
    middleware,
    routing::get,
    routing::post,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::require_auth;
use crate::error::AppError;
use crate::state::AppState;

/// Handler result: JSON body or an `{"error": ...}` response
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// JSON body extractor. A malformed body rejects with the same
/// `{"error": ...}` shape every other failure uses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query-string extractor with the same rejection shape as [`ApiJson`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Pagination query parameters, defaulting to the first page of ten
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/register", post(auth::handler::register))
        .route("/auth/login", post(auth::handler::login));

    let protected = Router::new()
        .route("/auth/me", get(auth::handler::me))
        .merge(users::router())
        .merge(employees::router())
        .merge(requests::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
