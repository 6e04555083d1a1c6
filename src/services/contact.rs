use chrono::{DateTime, Utc};

use crate::errors::SubmissionError;
use crate::models::{ContactRequest, ContactStatus, ContactSubmission, SubmissionReceipt, CONTACT_COLLECTION};
use crate::services::persist::persist_submission;
use crate::services::validation::{is_present, is_valid_email, sanitize_field};
use crate::state::AppState;

pub fn build_contact_submission(request: &ContactRequest, submitted_at: DateTime<Utc>) -> ContactSubmission {
    ContactSubmission {
        name: sanitize_field(request.name.as_deref()),
        email: sanitize_field(request.email.as_deref()).to_lowercase(),
        phone: sanitize_field(request.phone.as_deref()),
        message: sanitize_field(request.message.as_deref()),
        submitted_at,
        status: ContactStatus::New,
    }
}

/// Stores a contact form message. Phone is optional.
pub async fn submit_contact_form(
    state: &AppState,
    request: &ContactRequest,
) -> Result<SubmissionReceipt, SubmissionError> {
    if !(is_present(request.name.as_deref()) && is_present(request.email.as_deref())) {
        return Err(SubmissionError::MissingRequiredFields);
    }

    if !request.email.as_deref().is_some_and(is_valid_email) {
        return Err(SubmissionError::InvalidEmail);
    }

    let submission = build_contact_submission(request, Utc::now());
    persist_submission(state, CONTACT_COLLECTION, &submission).await
}
