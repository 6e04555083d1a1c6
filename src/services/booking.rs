use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::AvailabilityFaultPolicy;
use crate::db::Query;
use crate::errors::{AvailabilityError, SubmissionError};
use crate::models::availability::available_slots;
use crate::models::{
    BookingRecord, BookingRequest, BookingStatus, SubmissionReceipt, BOOKINGS_COLLECTION,
};
use crate::services::calendar::{format_calendar_date, normalize_preferred_date, parse_calendar_date};
use crate::services::persist::persist_submission;
use crate::services::validation::{is_present, is_valid_email, sanitize_field};
use crate::state::AppState;

pub fn build_booking_record(request: &BookingRequest, submitted_at: DateTime<Utc>) -> BookingRecord {
    BookingRecord {
        name: sanitize_field(request.name.as_deref()),
        email: sanitize_field(request.email.as_deref()).to_lowercase(),
        phone: sanitize_field(request.phone.as_deref()),
        service: sanitize_field(request.service.as_deref()),
        preferred_date: normalize_preferred_date(request.preferred_date.as_deref()),
        preferred_time: sanitize_field(request.preferred_time.as_deref()),
        message: sanitize_field(request.message.as_deref()),
        new_patient: request.new_patient,
        submitted_at,
        status: BookingStatus::Pending,
    }
}

/// Stores a consultation booking as `pending`.
///
/// Only name, email and phone are required here; callers run
/// `validate_booking_data` for the full form rules.
pub async fn submit_consultation_booking(
    state: &AppState,
    request: &BookingRequest,
) -> Result<SubmissionReceipt, SubmissionError> {
    if !(is_present(request.name.as_deref())
        && is_present(request.email.as_deref())
        && is_present(request.phone.as_deref()))
    {
        return Err(SubmissionError::MissingRequiredFields);
    }

    if !request.email.as_deref().is_some_and(is_valid_email) {
        return Err(SubmissionError::InvalidEmail);
    }

    let record = build_booking_record(request, Utc::now());
    persist_submission(state, BOOKINGS_COLLECTION, &record).await
}

/// Catalog slots not yet taken by a booking on the calendar day of `date`.
pub async fn get_available_time_slots(
    state: &AppState,
    date: &str,
) -> Result<Vec<String>, AvailabilityError> {
    let Some(day) = parse_calendar_date(date) else {
        tracing::warn!(date = %date, "could not parse availability date");
        return Err(AvailabilityError::InvalidDate);
    };

    let query = Query::collection(BOOKINGS_COLLECTION).eq("preferredDate", format_calendar_date(day));
    let bookings = match state.store.find(&query).await {
        Ok(result) => result.items,
        Err(e) => match state.config.on_availability_fault {
            AvailabilityFaultPolicy::FailOpen => {
                state.counters.record_fail_open_query();
                tracing::warn!(error = %e, date = %day, "bookings lookup failed, reporting all slots free");
                Vec::new()
            }
            AvailabilityFaultPolicy::FailClosed => {
                tracing::error!(error = %e, date = %day, "bookings lookup failed");
                return Err(AvailabilityError::Lookup);
            }
        },
    };

    let booked = bookings
        .iter()
        .filter_map(|doc| doc.data.get("preferredTime").and_then(Value::as_str));
    Ok(available_slots(booked))
}
