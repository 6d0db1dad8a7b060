//! Artist collection: one name or a batch, chosen by the request body
//!
//! `{"artist_name": "..."}` goes to the single-artist backend operation,
//! `{"artist_names": [...]}` to the batch operation.

use axum::{
    body::Bytes,
    extract::State,
    response::Response,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::proxy::relay;
use crate::backend::{BackendClient, BackendError, BackendReply};
use crate::{ApiError, ApiResult, AppState};

/// Error message for a body naming no artist
pub const MISSING_ARTIST_FIELDS: &str = "artist_name or artist_names required";

/// Which backend collection operation to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectTarget {
    Single(String),
    Batch(Vec<String>),
}

impl CollectTarget {
    /// Pick the operation from an inbound JSON body
    ///
    /// A non-empty `artist_name` wins over `artist_names`.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        if let Some(name) = body.get("artist_name").and_then(Value::as_str) {
            if !name.is_empty() {
                return Ok(CollectTarget::Single(name.to_string()));
            }
        }

        if let Some(names) = body.get("artist_names").and_then(Value::as_array) {
            let names = names
                .iter()
                .map(|n| n.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    ApiError::BadRequest("artist_names must be a list of strings".to_string())
                })?;
            return Ok(CollectTarget::Batch(names));
        }

        Err(ApiError::BadRequest(MISSING_ARTIST_FIELDS.to_string()))
    }

    pub fn backend_path(&self) -> &'static str {
        match self {
            CollectTarget::Single(_) => "/collection/artist",
            CollectTarget::Batch(_) => "/scoring/batch-collect",
        }
    }

    pub fn backend_body(&self) -> Value {
        match self {
            CollectTarget::Single(name) => json!({ "artist_name": name }),
            CollectTarget::Batch(names) => json!({ "artist_names": names }),
        }
    }
}

/// Split textarea input into names: one per line, trimmed, blanks dropped
pub fn parse_artist_names(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run a collection on the backend
pub async fn forward(
    backend: &BackendClient,
    target: &CollectTarget,
) -> Result<BackendReply, BackendError> {
    match target {
        CollectTarget::Single(name) => info!("Collecting artist '{}'", name),
        CollectTarget::Batch(names) => info!("Collecting batch of {} artists", names.len()),
    }

    backend
        .post(target.backend_path(), Some(&target.backend_body()))
        .await
}

/// POST /api/collect
pub async fn collect(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    let target = CollectTarget::from_body(&body)?;

    forward(&state.backend, &target)
        .await
        .map(relay)
        .map_err(ApiError::backend("collect artist data"))
}

/// Build collection routes
pub fn collect_routes() -> Router<AppState> {
    Router::new().route("/api/collect", post(collect))
}
