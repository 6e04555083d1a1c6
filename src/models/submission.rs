use serde::Serialize;

/// Outcome of `validate_booking_data`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// An accepted submission. `degraded` is set when the store rejected the
/// write and `id` is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: String,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingResponse {
    pub fn submitted(receipt: SubmissionReceipt) -> Self {
        Self {
            success: true,
            booking_id: Some(receipt.id),
            message: Some("Booking submitted successfully".to_string()),
            error: None,
        }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self {
            success: false,
            booking_id: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn submitted(receipt: SubmissionReceipt) -> Self {
        Self {
            success: true,
            submission_id: Some(receipt.id),
            message: Some("Contact form submitted successfully".to_string()),
            error: None,
        }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self {
            success: false,
            submission_id: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}
