//! Route modules for the validation server
//!
//! This module contains endpoint group-specific routers:
//! - validation: Trade batch validation endpoint
//! - health: Health check and readiness endpoints

pub mod health;
pub mod validation;

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use trade_validation::ValidationPipeline;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Rule pipeline, built once from the configuration
    pub pipeline: Arc<ValidationPipeline>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let pipeline = Arc::new(ValidationPipeline::from_config(&config.rules));
        Self {
            config,
            pipeline,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let body_limit = config.max_body_bytes;
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(validation::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
