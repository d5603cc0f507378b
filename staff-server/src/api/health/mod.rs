//! Health check endpoint

use axum::Json;
use serde_json::{Value, json};

/// GET /health — liveness probe, no auth
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
