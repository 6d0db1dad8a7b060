//! Error types for collector-dashboard
//!
//! Every handler failure becomes a JSON body `{"error": "..."}`:
//! - malformed inbound request → 400
//! - backend unreachable or non-success → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::backend::BackendError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Backend call failed (500)
    #[error("Failed to {action}: {source}")]
    Backend {
        /// What the handler was doing, e.g. "fetch artists"
        action: &'static str,
        #[source]
        source: BackendError,
    },
}

impl ApiError {
    pub fn backend(action: &'static str) -> impl FnOnce(BackendError) -> ApiError {
        move |source| ApiError::Backend { action, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Backend { action, source } => {
                error!("Failed to {}: {}", action, source);

                let mut body = json!({ "error": format!("Failed to {}", action) });
                if let Some(detail) = source.detail() {
                    body["detail"] = json!(detail);
                }

                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
