//! Shared forward-and-relay helpers
//!
//! A success reply is relayed with the backend's status and its JSON body
//! untouched. Failures map to [`ApiError::Backend`].

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::backend::BackendReply;
use crate::{ApiError, ApiResult, AppState};

pub(crate) fn relay(reply: BackendReply) -> Response {
    (reply.status, Json(reply.body)).into_response()
}

pub(crate) async fn forward_get(
    state: &AppState,
    path: &str,
    query: &[(&str, String)],
    action: &'static str,
) -> ApiResult<Response> {
    state
        .backend
        .get(path, query)
        .await
        .map(relay)
        .map_err(ApiError::backend(action))
}

pub(crate) async fn forward_post(
    state: &AppState,
    path: &str,
    body: Option<&Value>,
    action: &'static str,
) -> ApiResult<Response> {
    state
        .backend
        .post(path, body)
        .await
        .map(relay)
        .map_err(ApiError::backend(action))
}
