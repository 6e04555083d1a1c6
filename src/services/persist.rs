use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::PersistenceFailurePolicy;
use crate::errors::SubmissionError;
use crate::models::SubmissionReceipt;
use crate::state::AppState;

/// Id handed back when a write could not be stored.
pub fn placeholder_id(now: DateTime<Utc>) -> String {
    format!("temp-{}", now.timestamp_millis())
}

/// Writes `record` to `collection`, applying the configured policy when the
/// store refuses the write.
pub async fn persist_submission<T: Serialize>(
    state: &AppState,
    collection: &str,
    record: &T,
) -> Result<SubmissionReceipt, SubmissionError> {
    let data = serde_json::to_value(record).map_err(|e| {
        tracing::error!(error = %e, collection = %collection, "failed to serialize submission");
        SubmissionError::Server
    })?;

    match state.store.insert(collection, data.clone()).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, collection = %collection, "submission stored");
            Ok(SubmissionReceipt {
                id: stored.id,
                degraded: false,
            })
        }
        Err(e) => match state.config.on_persistence_failure {
            PersistenceFailurePolicy::Degrade => {
                let id = placeholder_id(Utc::now());
                state.counters.record_degraded_write();
                tracing::error!(error = %e, collection = %collection, "store insert failed");
                tracing::warn!(
                    placeholder_id = %id,
                    collection = %collection,
                    record = %data,
                    "submission not stored, answering with placeholder id"
                );
                Ok(SubmissionReceipt { id, degraded: true })
            }
            PersistenceFailurePolicy::Fail => {
                tracing::error!(error = %e, collection = %collection, "store insert failed");
                Err(SubmissionError::Server)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_id_uses_millis() {
        let now = DateTime::parse_from_rfc3339("2024-02-15T09:00:00.123Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(placeholder_id(now), "temp-1707987600123");
    }
}
