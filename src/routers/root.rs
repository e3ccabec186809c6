use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn health_check_route() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
