use serde::Serialize;

/// Best-effort snapshot of backend and database connectivity.
///
/// Collaborator failures are reported inside the fields, never as an
/// error response.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
