use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;
use serde_json::Value;

use super::{queries, DocumentStore, Query, QueryResult, StoredDocument};
use crate::errors::AppError;

/// `DocumentStore` backed by the `documents` table of a SQLite database.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|_| AppError::StoreUnavailable("database lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn insert(&self, collection: &str, record: Value) -> Result<StoredDocument, AppError> {
        let db = self.lock()?;
        if !queries::collection_exists(&db, collection)? {
            return Err(AppError::CollectionNotFound(collection.to_string()));
        }

        let id = uuid::Uuid::new_v4().to_string();
        queries::insert_document(&db, &id, collection, &record)?;

        Ok(StoredDocument { id, data: record })
    }

    async fn find(&self, query: &Query) -> Result<QueryResult, AppError> {
        let db = self.lock()?;
        if !queries::collection_exists(&db, &query.collection)? {
            return Err(AppError::CollectionNotFound(query.collection.clone()));
        }

        let items = queries::find_documents(&db, &query.collection, &query.filters)?;
        Ok(QueryResult { items })
    }
}
