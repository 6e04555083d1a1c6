use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinic_booking::config::AppConfig;
use clinic_booking::db::{self, SqliteDocumentStore};
use clinic_booking::handlers;
use clinic_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        database = %config.database_url,
        on_persistence_failure = config.on_persistence_failure.as_str(),
        on_availability_fault = config.on_availability_fault.as_str(),
        "loaded configuration"
    );

    let conn = db::init_db(&config.database_url)?;
    let store = Arc::new(SqliteDocumentStore::new(conn));

    let state = Arc::new(AppState::new(store, config.clone()));

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
