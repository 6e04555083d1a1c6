use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::config::{AvailabilityFaultPolicy, PersistenceFailurePolicy};
use crate::errors::AppError;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/status
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    on_persistence_failure: PersistenceFailurePolicy,
    on_availability_fault: AvailabilityFaultPolicy,
    degraded_writes: u64,
    fail_open_queries: u64,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    Ok(Json(StatusResponse {
        on_persistence_failure: state.config.on_persistence_failure,
        on_availability_fault: state.config.on_availability_fault,
        degraded_writes: state.counters.degraded_writes(),
        fail_open_queries: state.counters.fail_open_queries(),
    }))
}
