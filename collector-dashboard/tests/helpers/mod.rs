//! Test helpers for collector-dashboard integration tests
//!
//! - StubBackend: in-process stand-in for the collector backend
//! - request/body helpers for driving the router with `oneshot`

#![allow(dead_code)]

pub mod stub_backend;

pub use stub_backend::{unreachable_backend_url, Seen, StubBackend};

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use collector_dashboard::backend::BackendClient;
use collector_dashboard::{build_router, AppState};
use serde_json::Value;

/// Dashboard router pointed at `backend_url`
pub fn dashboard(backend_url: &str) -> Router {
    let backend = BackendClient::new(backend_url).expect("Should build backend client");
    build_router(AppState::new(backend))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, "application/json", body.to_string())
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    post_raw(uri, "application/x-www-form-urlencoded", body.to_string())
}

pub fn post_raw(uri: &str, content_type: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Should parse JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("Should be UTF-8")
}
