//! HTTP client for the collector backend
//!
//! One attempt per call: no retries, no backoff and no request timeout. A
//! hung backend holds the inbound request until the client goes away.

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("collector-dashboard/", env!("CARGO_PKG_VERSION"));

/// Backend call errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport failure (connection refused, DNS, reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        /// FastAPI-style `detail` message from the error body, if any
        detail: Option<String>,
    },

    /// Success status but the body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Successful backend response: status plus decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Value,
}

/// Collector backend client
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` (already normalized, no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/artists`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with query parameters
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<BackendReply, BackendError> {
        let url = self.url(path);
        debug!(url = %url, ?query, "GET backend");

        let request = self.http.get(&url).query(query);
        Self::execute(request).await
    }

    /// POST `path` with an optional JSON body
    ///
    /// `Content-Type: application/json` is sent even when there is no body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<BackendReply, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "POST backend");

        let request = match body {
            Some(body) => self.http.post(&url).json(body),
            None => self
                .http
                .post(&url)
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
        };
        Self::execute(request).await
    }

    /// GET `path` and decode the body into `T`
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let reply = self.get(path, query).await?;
        decode(reply.body)
    }

    async fn execute(request: reqwest::RequestBuilder) -> Result<BackendReply, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        // reqwest and axum sit on different `http` versions; convert by code
        let status = response.status().as_u16();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Status {
                status,
                detail: extract_detail(&bytes),
            });
        }

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))?
        };

        Ok(BackendReply {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::OK),
            body,
        })
    }
}

/// Decode a relayed body into a typed model
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, BackendError> {
    serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Pull a `detail` string out of an error body
///
/// FastAPI reports errors as `{"detail": "..."}`; validation errors use a
/// list under the same key, which is rendered as JSON text.
fn extract_detail(bytes: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(bytes).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
