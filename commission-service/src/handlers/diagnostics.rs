use crate::dtos::DiagnosticsResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};
use std::env;

/// Report backend and database connectivity for troubleshooting.
///
/// Best-effort by design: every collaborator failure is downgraded to a
/// string field and the endpoint always answers 200.
pub async fn database_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        match store.list_collection_names().await {
            Ok(collections) => {
                response.collections = collections.into_iter().take(10).collect();
                response.database = "connected".to_string();
                response.connection_status = "connected".to_string();
            }
            Err(e) => {
                response.database = format!("error: {}", truncate(&e.to_string(), 50));
                response.connection_status = "error".to_string();
            }
        }
    }

    Json(response)
}

fn env_presence(key: &str) -> String {
    let set = env::var(key).map(|v| !v.is_empty()).unwrap_or(false);
    if set { "set" } else { "not set" }.to_string()
}

/// Cap collaborator error text so the diagnostic stays readable.
fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
