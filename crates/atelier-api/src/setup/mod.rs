//! Application setup and initialization

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use atelier_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated successfully");

    let store = atelier_store::create_store(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize asset store: {}", e))?;

    let state = Arc::new(AppState::new(config.clone(), store));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
