use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::payload_or_default;
use crate::models::{ContactRequest, ContactResponse};
use crate::services::contact;
use crate::state::AppState;

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let request = payload_or_default(payload);

    match contact::submit_contact_form(&state, &request).await {
        Ok(receipt) => (StatusCode::OK, Json(ContactResponse::submitted(receipt))).into_response(),
        Err(e) => (e.status_code(), Json(ContactResponse::rejected(&e))).into_response(),
    }
}
