//! Extraction job control, status polling and YouTube quota
//!
//! The status endpoint never fails: when the backend cannot be reached it
//! answers 200 with the idle snapshot so status displays keep working.

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use collector_common::models::ProcessStatus;
use futures::stream::{Stream, StreamExt};
use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;
use std::time::Duration;
use tracing::{info, warn};

use super::proxy::{forward_get, forward_post};
use crate::backend::BackendClient;
use crate::poller::poll_stream;
use crate::{ApiResult, AppState};

/// Current extraction status, or the idle snapshot if the backend failed
pub async fn status_or_idle(backend: &BackendClient) -> (StatusCode, Value) {
    match backend.get("/extraction/status", &[]).await {
        Ok(reply) => (reply.status, reply.body),
        Err(e) => {
            warn!("Extraction status unavailable, reporting idle: {}", e);
            let idle = ProcessStatus::idle_with_error(e.to_string());
            (StatusCode::OK, serde_json::to_value(idle).unwrap_or_default())
        }
    }
}

/// Status snapshot pushed on the event stream, with display fields resolved
#[derive(Debug, Serialize)]
pub struct StatusUpdate {
    #[serde(flatten)]
    pub status: ProcessStatus,
    pub process_label: String,
    pub running: bool,
    /// Progress clamped to 0-100
    pub progress: f64,
}

impl StatusUpdate {
    /// Build from a backend body; an undecodable body reads as idle
    pub fn from_body(body: Value) -> Self {
        let status = serde_json::from_value::<ProcessStatus>(body).unwrap_or_else(|e| {
            warn!("Unreadable extraction status, reporting idle: {}", e);
            ProcessStatus::idle_with_error(format!("Decode error: {}", e))
        });

        Self {
            process_label: status
                .process_type
                .as_ref()
                .map(|kind| kind.label().to_string())
                .unwrap_or_else(|| "No process".to_string()),
            running: status.status.is_running(),
            progress: status.progress_clamped(),
            status,
        }
    }
}

/// GET /api/extraction/status → `/extraction/status`
pub async fn extraction_status(State(state): State<AppState>) -> Response {
    let (status, body) = status_or_idle(&state.backend).await;
    (status, Json(body)).into_response()
}

/// GET /api/extraction/status/stream
///
/// Server-sent `ProcessStatus` events carrying a [`StatusUpdate`]: one poll
/// when the client connects, then one per poll interval until the client
/// disconnects.
pub async fn extraction_status_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to extraction status");

    let backend = state.backend.clone();
    let updates = poll_stream(state.poll_interval, move || {
        let backend = backend.clone();
        async move { StatusUpdate::from_body(status_or_idle(&backend).await.1) }
    });

    let events = updates.map(|update| {
        let data = serde_json::to_string(&update).unwrap_or_else(|_| "{}".to_string());
        Ok(Event::default().event("ProcessStatus").data(data))
    });

    Sse::new(events).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    )
}

/// POST /api/extraction/phase1-background → `/extraction/phase1-background`
pub async fn phase1_background(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/extraction/phase1-background",
        None,
        "start Phase 1 background extraction",
    )
    .await
}

/// POST /api/extraction/phase2-background → `/extraction/phase2-background`
pub async fn phase2_background(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/extraction/phase2-background",
        None,
        "start Phase 2 background extraction",
    )
    .await
}

/// POST /api/extraction/phase1-complete → `/extraction/phase1-complete`
///
/// Synchronous variant: the backend answers when the run has finished.
pub async fn phase1_complete(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/extraction/phase1-complete",
        None,
        "run Phase 1 extraction",
    )
    .await
}

/// POST /api/extraction/phase2-weekly → `/extraction/phase2-weekly`
pub async fn phase2_weekly(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/extraction/phase2-weekly",
        None,
        "run Phase 2 extraction",
    )
    .await
}

/// POST /api/extraction/stop-process → `/dashboard/stop-process`
pub async fn stop_process(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(&state, "/dashboard/stop-process", None, "stop the running process").await
}

/// GET /api/extraction/youtube-quota → `/extraction/youtube-quota`
pub async fn youtube_quota(State(state): State<AppState>) -> ApiResult<Response> {
    forward_get(&state, "/extraction/youtube-quota", &[], "fetch YouTube quota").await
}

/// POST /api/extraction/youtube-reset → `/extraction/youtube-reset-keys`
pub async fn youtube_reset(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/extraction/youtube-reset-keys",
        None,
        "reset YouTube keys",
    )
    .await
}

/// Build extraction routes
pub fn extraction_routes() -> Router<AppState> {
    Router::new()
        .route("/api/extraction/status", get(extraction_status))
        .route("/api/extraction/status/stream", get(extraction_status_stream))
        .route("/api/extraction/phase1-background", post(phase1_background))
        .route("/api/extraction/phase2-background", post(phase2_background))
        .route("/api/extraction/phase1-complete", post(phase1_complete))
        .route("/api/extraction/phase2-weekly", post(phase2_weekly))
        .route("/api/extraction/stop-process", post(stop_process))
        .route("/api/extraction/youtube-quota", get(youtube_quota))
        .route("/api/extraction/youtube-reset", post(youtube_reset))
}
