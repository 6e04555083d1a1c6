use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::payload_or_default;
use crate::errors::AvailabilityError;
use crate::models::availability::slot_options;
use crate::models::{
    AvailabilityResponse, BookingRequest, BookingResponse, TimeSlotOption, ValidationReport, SERVICES,
};
use crate::services::calendar::{bookable_dates, format_calendar_date};
use crate::services::{booking, validation};
use crate::state::AppState;

// POST /api/bookings
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let request = payload_or_default(payload);

    match booking::submit_consultation_booking(&state, &request).await {
        Ok(receipt) => (StatusCode::OK, Json(BookingResponse::submitted(receipt))).into_response(),
        Err(e) => (e.status_code(), Json(BookingResponse::rejected(&e))).into_response(),
    }
}

// POST /api/bookings/validate
pub async fn validate_booking(
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Json<ValidationReport> {
    let request = payload_or_default(payload);
    Json(validation::validate_booking_data(&request))
}

// GET /api/availability?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

pub async fn available_time_slots(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable availability query");
            let e = AvailabilityError::InvalidDate;
            return (e.status_code(), Json(AvailabilityResponse::failed(&e))).into_response();
        }
    };

    let Some(date) = query.date else {
        let e = AvailabilityError::InvalidDate;
        return (e.status_code(), Json(AvailabilityResponse::failed(&e))).into_response();
    };

    match booking::get_available_time_slots(&state, &date).await {
        Ok(slots) => Json(AvailabilityResponse::available(&date, slots)).into_response(),
        Err(e) => (e.status_code(), Json(AvailabilityResponse::failed(&e))).into_response(),
    }
}

// GET /api/booking/options
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    id: &'static str,
    label: String,
    description: &'static str,
    duration_minutes: Option<u32>,
    price_dollars: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptionsResponse {
    services: Vec<ServiceOption>,
    time_slots: Vec<TimeSlotOption>,
    dates: Vec<String>,
}

pub async fn booking_options(State(state): State<Arc<AppState>>) -> Json<BookingOptionsResponse> {
    let today = chrono::Local::now().date_naive();

    let services = SERVICES
        .iter()
        .map(|s| ServiceOption {
            id: s.id,
            label: s.label(),
            description: s.description,
            duration_minutes: s.duration_minutes,
            price_dollars: s.price_dollars,
        })
        .collect();

    let dates = bookable_dates(today, state.config.booking_horizon_days)
        .into_iter()
        .map(format_calendar_date)
        .collect();

    Json(BookingOptionsResponse {
        services,
        time_slots: slot_options(),
        dates,
    })
}
