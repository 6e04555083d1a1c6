use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Name of the document collection booking records are written to.
pub const BOOKINGS_COLLECTION: &str = "ConsultationBookings";

/// Untrusted booking form input. Every field may be missing; text fields
/// holding non-string JSON are read as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub preferred_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::strict_bool")]
    pub new_patient: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub preferred_date: Option<String>,
    pub preferred_time: String,
    pub message: String,
    pub new_patient: bool,
    pub submitted_at: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Submissions are always written as `Pending`; the other states are set by
/// clinic staff outside this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_reads_camel_case_fields() {
        let req: BookingRequest = serde_json::from_str(
            r#"{"name":"Jo","preferredDate":"2024-02-15","preferredTime":"09:00","newPatient":true}"#,
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Jo"));
        assert_eq!(req.preferred_date.as_deref(), Some("2024-02-15"));
        assert_eq!(req.preferred_time.as_deref(), Some("09:00"));
        assert!(req.new_patient);
        assert!(req.email.is_none());
    }

    #[test]
    fn test_request_non_string_fields_read_as_missing() {
        let req: BookingRequest =
            serde_json::from_str(r#"{"name":42,"phone":null,"email":["a@b.com"]}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.phone.is_none());
        assert!(req.email.is_none());
    }

    #[test]
    fn test_new_patient_is_strict() {
        for raw in [r#"{"newPatient":"true"}"#, r#"{"newPatient":1}"#, r#"{}"#] {
            let req: BookingRequest = serde_json::from_str(raw).unwrap();
            assert!(!req.new_patient, "{raw} should not count as a new patient");
        }
    }

    #[test]
    fn test_status_reads_stored_values() {
        let status: BookingStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
        assert!(serde_json::from_str::<BookingStatus>(r#""Pending""#).is_err());
    }

    #[test]
    fn test_record_serializes_status_lowercase() {
        let record = BookingRecord {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            phone: "5551234567".to_string(),
            service: "initial".to_string(),
            preferred_date: None,
            preferred_time: String::new(),
            message: String::new(),
            new_patient: false,
            submitted_at: Utc::now(),
            status: BookingStatus::Pending,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["preferredDate"], serde_json::Value::Null);
        assert_eq!(json["newPatient"], false);
    }
}
