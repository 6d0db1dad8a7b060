//! Static asset handlers
//!
//! CSS/JS are embedded at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const DASHBOARD_CSS: &str = include_str!("../../../static/dashboard.css");
const ARTISTS_JS: &str = include_str!("../../../static/artists.js");
const COLLECT_JS: &str = include_str!("../../../static/collect.js");
const EXTRACTION_JS: &str = include_str!("../../../static/extraction.js");

fn asset(content_type: &'static str, body: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", content_type),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        body,
    )
        .into_response()
}

/// GET /static/dashboard.css
pub async fn serve_dashboard_css() -> Response {
    asset("text/css", DASHBOARD_CSS)
}

/// GET /static/artists.js
///
/// Per-row refresh buttons on the artists page
pub async fn serve_artists_js() -> Response {
    asset("application/javascript", ARTISTS_JS)
}

/// GET /static/collect.js
pub async fn serve_collect_js() -> Response {
    asset("application/javascript", COLLECT_JS)
}

/// GET /static/extraction.js
///
/// Live status, job controls, quota and opportunity preview
pub async fn serve_extraction_js() -> Response {
    asset("application/javascript", EXTRACTION_JS)
}
