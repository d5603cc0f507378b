//! Request API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let read_routes = Router::new()
        .route("/requests", get(handler::list))
        .route("/requests/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/requests", post(handler::create))
        .route(
            "/requests/{id}",
            put(handler::update).delete(handler::remove),
        )
        .route("/requests/{id}/deactivate", put(handler::deactivate))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
