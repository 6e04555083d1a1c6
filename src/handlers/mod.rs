pub mod admin;
pub mod booking;
pub mod contact;
pub mod health;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/bookings", post(booking::submit_booking))
        .route("/api/bookings/validate", post(booking::validate_booking))
        .route("/api/availability", get(booking::available_time_slots))
        .route("/api/booking/options", get(booking::booking_options))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/admin/status", get(admin::get_status))
        .with_state(state)
}

/// Form payloads that fail to parse are handled as an empty form, so the
/// caller still gets the usual structured rejection.
fn payload_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable form payload, treating as empty");
            T::default()
        }
    }
}
