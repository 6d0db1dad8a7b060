//! collector-dashboard library
//!
//! Web dashboard for reviewing artist-scoring data. Every `/api/*` route is a
//! thin proxy onto one collector backend endpoint; the HTML pages render
//! backend data for human review.

pub mod api;
pub mod backend;
pub mod error;
pub mod poller;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use collector_common::config::{DashboardConfig, STATUS_POLL_INTERVAL};
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::backend::{BackendClient, BackendError};

/// Application state shared across handlers
///
/// Holds no mutable state: each request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Client for the collector backend
    pub backend: BackendClient,
    /// Interval of the extraction status poll
    pub poll_interval: Duration,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            poll_interval: STATUS_POLL_INTERVAL,
            startup_time: Utc::now(),
        }
    }

    /// Build state from resolved configuration
    pub fn from_config(config: &DashboardConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(config.backend_url.clone())?;
        Ok(Self::new(backend).with_poll_interval(config.poll_interval))
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        // Proxy routes
        .merge(api::artist_routes())
        .merge(api::collect_routes())
        .merge(api::scoring_routes())
        .merge(api::extraction_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
