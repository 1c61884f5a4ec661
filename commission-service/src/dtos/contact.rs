use crate::models::ContactSubmission;
use serde::Serialize;
use validator::Validate;

/// Text fields of the contact form, validated before the submission is
/// accepted.
#[derive(Debug, Default, Validate)]
pub struct ContactFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub tier: Option<String>,

    /// Comma-separated add-on labels, as submitted by the form.
    pub addons: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    pub message: String,
    pub id: Option<String>,
    pub received: ContactSubmission,
}
