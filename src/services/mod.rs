pub mod booking;
pub mod calendar;
pub mod contact;
pub mod persist;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::config::AppConfig;
    use crate::db::{DocumentStore, Query, QueryResult, StoredDocument};
    use crate::errors::AppError;
    use crate::state::AppState;

    /// In-memory store that records writes and can be told to fail.
    #[derive(Default)]
    pub struct MockStore {
        pub inserted: Mutex<Vec<(String, Value)>>,
        pub existing: Vec<StoredDocument>,
        pub fail_inserts: bool,
        pub fail_queries: bool,
    }

    #[async_trait]
    impl DocumentStore for MockStore {
        async fn insert(&self, collection: &str, record: Value) -> Result<StoredDocument, AppError> {
            if self.fail_inserts {
                return Err(AppError::CollectionNotFound(collection.to_string()));
            }
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push((collection.to_string(), record.clone()));
            Ok(StoredDocument {
                id: format!("doc-{}", inserted.len()),
                data: record,
            })
        }

        async fn find(&self, query: &Query) -> Result<QueryResult, AppError> {
            if self.fail_queries {
                return Err(AppError::StoreUnavailable("query refused".to_string()));
            }
            let items = self
                .existing
                .iter()
                .filter(|doc| {
                    query
                        .filters
                        .iter()
                        .all(|(field, value)| doc.data.get(field) == Some(value))
                })
                .cloned()
                .collect();
            Ok(QueryResult { items })
        }
    }

    pub fn state_with(store: Arc<MockStore>, config: AppConfig) -> AppState {
        AppState::new(store, config)
    }
}
