//! Employee API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // Reads are open to any authenticated staff role.
    let read_routes = Router::new()
        .route("/employees", get(handler::list))
        .route("/employees/{id}", get(handler::get_by_id));

    // Mutations are admin only.
    let manage_routes = Router::new()
        .route("/employees", post(handler::create))
        .route(
            "/employees/{id}",
            put(handler::update).delete(handler::remove),
        )
        .route("/employees/{id}/deactivate", put(handler::deactivate))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
