use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata recorded for an uploaded reference image.
///
/// Only the name, type and size are kept; the bytes themselves are
/// discarded after measuring. `size` is `None` when the part could not be
/// read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<i64>,
}

/// A commission inquiry, as persisted to the document store and echoed
/// back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub description: String,
    pub tier: Option<String>,
    pub addons: Vec<String>,
    pub files: Vec<FileInfo>,
    pub source: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(
        name: String,
        email: String,
        description: String,
        tier: Option<String>,
        addons: Vec<String>,
        files: Vec<FileInfo>,
    ) -> Self {
        Self {
            name,
            email,
            description,
            tier,
            addons,
            files,
            source: "website".to_string(),
            submitted_at: Utc::now(),
        }
    }
}
