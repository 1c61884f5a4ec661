use crate::dtos::{ContactFields, ContactResponse};
use crate::models::{ContactSubmission, FileInfo};
use crate::startup::AppState;
use axum::{
    extract::{
        multipart::{Field, Multipart},
        State,
    },
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// Collection contact submissions are persisted to.
const CONTACT_COLLECTION: &str = "contactrequest";

const ACK_MESSAGE: &str = "Thanks! We'll get back to you within 24-48 hours.";

/// Accept a commission inquiry with optional reference image uploads.
///
/// Uploaded files are measured and discarded, never written to storage.
/// Persistence of the payload is best-effort: a missing or failing store
/// yields `id: null`, not a request failure — the inquiry was already
/// accepted.
pub async fn submit_contact(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut fields = ContactFields::default();
    let mut files: Vec<FileInfo> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "name" => fields.name = read_text(field).await?,
            "email" => fields.email = read_text(field).await?,
            "description" => fields.description = read_text(field).await?,
            "tier" => fields.tier = Some(read_text(field).await?),
            "addons" => fields.addons = Some(read_text(field).await?),
            "files" => files.push(read_file(field).await),
            _ => {}
        }
    }

    fields.validate()?;

    let addons = parse_addons(fields.addons.as_deref());
    let submission = ContactSubmission::new(
        fields.name,
        fields.email,
        fields.description,
        fields.tier,
        addons,
        files,
    );

    let id = persist(&state, &submission).await;

    tracing::info!(
        email = %submission.email,
        files = submission.files.len(),
        persisted = id.is_some(),
        "Contact submission accepted"
    );

    Ok(Json(ContactResponse {
        ok: true,
        message: ACK_MESSAGE.to_string(),
        id,
        received: submission,
    }))
}

/// Best-effort persistence. Any failure is logged and degraded to `None`.
async fn persist(state: &AppState, submission: &ContactSubmission) -> Option<String> {
    let store = state.store.as_ref()?;

    let payload = match bson::to_document(submission) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Failed to serialize contact submission: {}", e);
            return None;
        }
    };

    match store.create_document(CONTACT_COLLECTION, payload).await {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("Failed to persist contact submission: {}", e);
            None
        }
    }
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read form field: {}", e)))
}

/// Read an uploaded part to measure it. The bytes are discarded, and a
/// failed read degrades to an entry with an unknown size instead of
/// failing the whole submission.
async fn read_file(field: Field<'_>) -> FileInfo {
    let filename = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);

    match field.bytes().await {
        Ok(bytes) => FileInfo {
            filename,
            content_type,
            size: Some(bytes.len() as i64),
        },
        Err(e) => {
            tracing::warn!(filename = ?filename, "Failed to read uploaded file: {}", e);
            FileInfo {
                filename,
                content_type,
                size: None,
            }
        }
    }
}

/// Split the comma-separated add-ons form field into trimmed labels.
fn parse_addons(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_addons_splits_and_trims() {
        assert_eq!(
            parse_addons(Some("Magnetization, OSL Effects")),
            vec!["Magnetization".to_string(), "OSL Effects".to_string()]
        );
    }

    #[test]
    fn parse_addons_drops_empty_entries() {
        assert_eq!(
            parse_addons(Some(",Magnetization,, ,")),
            vec!["Magnetization".to_string()]
        );
        assert!(parse_addons(Some("")).is_empty());
    }

    #[test]
    fn parse_addons_handles_missing_field() {
        assert!(parse_addons(None).is_empty());
    }
}
