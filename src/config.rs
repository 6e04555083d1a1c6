use std::env;

use serde::Serialize;

/// What a submission does when the document store rejects the write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistenceFailurePolicy {
    /// Answer with a `temp-<millis>` placeholder id and log the record.
    Degrade,
    /// Report a server error to the caller.
    Fail,
}

impl PersistenceFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceFailurePolicy::Degrade => "degrade",
            PersistenceFailurePolicy::Fail => "fail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "degrade" | "degrade-with-placeholder-id" => Some(PersistenceFailurePolicy::Degrade),
            "fail" => Some(PersistenceFailurePolicy::Fail),
            _ => None,
        }
    }
}

/// What an availability query does when the bookings lookup faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityFaultPolicy {
    /// Treat the day as having no bookings.
    FailOpen,
    /// Report the query as failed.
    FailClosed,
}

impl AvailabilityFaultPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityFaultPolicy::FailOpen => "fail-open",
            AvailabilityFaultPolicy::FailClosed => "fail-closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail-open" | "open" => Some(AvailabilityFaultPolicy::FailOpen),
            "fail-closed" | "closed" => Some(AvailabilityFaultPolicy::FailClosed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub on_persistence_failure: PersistenceFailurePolicy,
    pub on_availability_fault: AvailabilityFaultPolicy,
    pub booking_horizon_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "clinic.db".to_string(),
            admin_token: "changeme".to_string(),
            on_persistence_failure: PersistenceFailurePolicy::Degrade,
            on_availability_fault: AvailabilityFaultPolicy::FailOpen,
            booking_horizon_days: 90,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or(defaults.admin_token),
            on_persistence_failure: env::var("ON_PERSISTENCE_FAILURE")
                .ok()
                .map(|v| {
                    PersistenceFailurePolicy::parse(&v).unwrap_or_else(|| {
                        tracing::warn!(value = %v, "unknown ON_PERSISTENCE_FAILURE, using degrade");
                        defaults.on_persistence_failure
                    })
                })
                .unwrap_or(defaults.on_persistence_failure),
            on_availability_fault: env::var("ON_AVAILABILITY_FAULT")
                .ok()
                .map(|v| {
                    AvailabilityFaultPolicy::parse(&v).unwrap_or_else(|| {
                        tracing::warn!(value = %v, "unknown ON_AVAILABILITY_FAULT, using fail-open");
                        defaults.on_availability_fault
                    })
                })
                .unwrap_or(defaults.on_availability_fault),
            booking_horizon_days: env::var("BOOKING_HORIZON_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.booking_horizon_days),
        }
    }
}
