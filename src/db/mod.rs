pub mod migrations;
pub mod queries;
pub mod store;

use anyhow::Context;
use async_trait::async_trait;
use rusqlite::Connection;
use serde_json::Value;

use crate::errors::AppError;

pub use store::SqliteDocumentStore;

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// A document as held by the store, with the id the store assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub items: Vec<StoredDocument>,
}

/// Equality query over one collection. Filters are AND-ed.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<(String, Value)>,
}

impl Query {
    pub fn collection(name: &str) -> Self {
        Self {
            collection: name.to_string(),
            filters: Vec::new(),
        }
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }
}

/// Document persistence used by the booking and contact operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, record: Value) -> Result<StoredDocument, AppError>;

    async fn find(&self, query: &Query) -> Result<QueryResult, AppError>;
}
