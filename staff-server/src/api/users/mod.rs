//! User (account) API module — admin only

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list).post(handler::create))
        .route("/users/available", get(handler::available))
        .route(
            "/users/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::remove),
        )
        .route("/users/{id}/role", put(handler::update_role))
        .route("/users/{id}/deactivate", put(handler::deactivate))
        .layer(middleware::from_fn(require_admin))
}
