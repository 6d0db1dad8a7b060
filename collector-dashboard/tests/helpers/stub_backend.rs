//! Stub collector backend
//!
//! Serves canned replies per path on a loopback port and records every
//! request it receives.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request as received by the stub
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Seen {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Stub saw non-JSON body")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Json(u16, Value),
    Raw(u16, String),
}

#[derive(Clone, Default)]
struct StubState {
    replies: Arc<HashMap<String, Reply>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

/// Builder and handle for a running stub backend
pub struct StubBackend {
    replies: HashMap<String, Reply>,
    seen: Arc<Mutex<Vec<Seen>>>,
    url: Option<String>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            seen: Arc::new(Mutex::new(Vec::new())),
            url: None,
        }
    }

    /// Answer `path` with `status` and a JSON body
    pub fn reply(mut self, path: &str, status: u16, body: Value) -> Self {
        self.replies.insert(path.to_string(), Reply::Json(status, body));
        self
    }

    /// Answer `path` with `status` and a raw text body
    pub fn reply_raw(mut self, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .insert(path.to_string(), Reply::Raw(status, body.to_string()));
        self
    }

    /// Bind a loopback port and serve in the background
    pub async fn start(mut self) -> Self {
        let state = StubState {
            replies: Arc::new(self.replies.clone()),
            seen: self.seen.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Should bind stub backend");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        self.url = Some(format!("http://{}", addr));
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().expect("Stub backend not started")
    }

    /// All requests received so far
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// The only request received so far
    pub fn single(&self) -> Seen {
        let seen = self.seen();
        assert_eq!(seen.len(), 1, "Expected exactly one backend call: {:?}", seen);
        seen.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Response {
    state.seen.lock().unwrap().push(Seen {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.replies.get(uri.path()) {
        Some(Reply::Json(status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            axum::Json(body.clone()),
        )
            .into_response(),
        Some(Reply::Raw(status, body)) => {
            (StatusCode::from_u16(*status).unwrap(), body.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "detail": "Not Found" })),
        )
            .into_response(),
    }
}

/// URL of a loopback port nothing listens on
pub async fn unreachable_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind probe listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
