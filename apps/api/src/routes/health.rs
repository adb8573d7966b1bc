use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Resume Evaluation API is running!" }))
}
