use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CollectionNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Rejections surfaced to callers of the submission operations. The display
/// text is the exact message returned in the response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Server error occurred")]
    Server,
}

impl SubmissionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MissingRequiredFields | SubmissionError::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            SubmissionError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures of the availability query. Callers see the same message for
/// both; the variant only picks the status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Could not retrieve available time slots")]
    InvalidDate,

    #[error("Could not retrieve available time slots")]
    Lookup,
}

impl AvailabilityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AvailabilityError::InvalidDate => StatusCode::BAD_REQUEST,
            AvailabilityError::Lookup => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
