use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::DocumentStore;

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: AppConfig,
    pub counters: DegradationCounters,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
        Self {
            store,
            config,
            counters: DegradationCounters::default(),
        }
    }
}

/// How often an operation answered without the store behind it.
#[derive(Debug, Default)]
pub struct DegradationCounters {
    degraded_writes: AtomicU64,
    fail_open_queries: AtomicU64,
}

impl DegradationCounters {
    pub fn record_degraded_write(&self) {
        self.degraded_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fail_open_query(&self) {
        self.fail_open_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn degraded_writes(&self) -> u64 {
        self.degraded_writes.load(Ordering::Relaxed)
    }

    pub fn fail_open_queries(&self) -> u64 {
        self.fail_open_queries.load(Ordering::Relaxed)
    }
}
