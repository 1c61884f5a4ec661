use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness banner at the site root.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Commission API running" }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "commission-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
