//! UI Routes - HTML pages for the collector dashboard
//!
//! # Structure
//! - **Static Assets** (`static_assets`): embedded CSS/JS
//! - **Opportunities** (`opportunities`): ranked opportunity cards (landing page)
//! - **Artists** (`artists`): full artist table with per-row refresh
//! - **Collect** (`collect`): single and batch artist collection forms
//! - **Extraction** (`extraction`): live job status and job controls
//!
//! Pages showing backend lists are rendered server-side. The extraction page
//! is a shell filled in by `extraction.js` from the status event stream.

use axum::{
    response::Html,
    routing::get,
    Router,
};

use crate::AppState;

mod artists;
mod collect;
mod extraction;
mod opportunities;
mod static_assets;

use artists::artists_page;
use collect::{collect_page, collect_submit};
use extraction::extraction_page;
use opportunities::opportunities_page;
use static_assets::{
    serve_artists_js, serve_collect_js, serve_dashboard_css, serve_extraction_js,
};

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(opportunities_page))
        .route("/artists", get(artists_page))
        .route("/collect", get(collect_page).post(collect_submit))
        .route("/extraction", get(extraction_page))
        // Static assets
        .route("/static/dashboard.css", get(serve_dashboard_css))
        .route("/static/artists.js", get(serve_artists_js))
        .route("/static/collect.js", get(serve_collect_js))
        .route("/static/extraction.js", get(serve_extraction_js))
}

/// Navigation entries, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nav {
    Opportunities,
    Artists,
    Collect,
    Extraction,
}

impl Nav {
    const ALL: [Nav; 4] = [Nav::Opportunities, Nav::Artists, Nav::Collect, Nav::Extraction];

    fn href(self) -> &'static str {
        match self {
            Nav::Opportunities => "/",
            Nav::Artists => "/artists",
            Nav::Collect => "/collect",
            Nav::Extraction => "/extraction",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Nav::Opportunities => "Opportunities",
            Nav::Artists => "Artists",
            Nav::Collect => "Collect",
            Nav::Extraction => "Extraction",
        }
    }
}

/// Wrap page content in the shared layout (header, nav, build info)
pub(crate) fn layout(
    title: &str,
    subtitle: &str,
    active: Nav,
    content: &str,
    script: Option<&str>,
) -> Html<String> {
    let nav = Nav::ALL
        .iter()
        .map(|item| {
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", item.href(), class, item.label())
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let script_tag = script
        .map(|src| format!("<script src=\"{}\"></script>", src))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Artists Collector</title>
    <link rel="stylesheet" href="/static/dashboard.css">
</head>
<body>
    <header>
        <div class="header-content">
            <div class="header-left">
                <h1>{title}</h1>
                <p class="subtitle">{subtitle}</p>
            </div>
            <div class="header-right">
                <div class="build-info-line">collector-dashboard v{version}</div>
                <div class="build-info-line">{git_hash} ({profile})</div>
                <div class="build-info-line">{timestamp}</div>
            </div>
        </div>
        <nav>
                {nav}
        </nav>
    </header>
    <main class="content">
{content}
    </main>
    {script_tag}
</body>
</html>"#,
        title = escape_html(title),
        subtitle = escape_html(subtitle),
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        profile = env!("BUILD_PROFILE"),
        timestamp = env!("BUILD_TIMESTAMP"),
        nav = nav,
        content = content,
        script_tag = script_tag,
    ))
}

/// Error panel with a retry link back to `retry_href`
pub(crate) fn error_panel(message: &str, retry_href: &str) -> String {
    format!(
        r#"<div class="panel error-panel">
    <h2>Error</h2>
    <p>{}</p>
    <a class="button" href="{}">Retry</a>
</div>"#,
        escape_html(message),
        retry_href
    )
}

/// Escape text for HTML element content and quoted attributes
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
