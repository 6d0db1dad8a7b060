//! Extraction page handler
//!
//! Static shell only. `extraction.js` subscribes to
//! `/api/extraction/status/stream` and fills in the element ids below.

use axum::response::Html;

use super::{layout, Nav};

/// GET /extraction
pub async fn extraction_page() -> Html<String> {
    layout(
        "Extraction Control",
        "Run and monitor artist extraction and scoring jobs",
        Nav::Extraction,
        EXTRACTION_CONTENT,
        Some("/static/extraction.js"),
    )
}

const EXTRACTION_CONTENT: &str = r#"<div id="action-message" class="message" hidden></div>

<section class="panel" id="status-panel">
    <div class="toolbar">
        <h2>Current process</h2>
        <span id="connection-status" class="connection-status">Connecting...</span>
    </div>
    <div class="status-row">
        <span id="process-type" class="process-type">-</span>
        <span id="process-state" class="status status-idle">idle</span>
    </div>
    <div class="progress-bar"><div id="progress-fill" class="progress-fill" style="width: 0%"></div></div>
    <div id="progress-text" class="progress-text">0%</div>
    <p id="current-step" class="current-step"></p>
    <dl class="metrics">
        <dt>Sources</dt><dd id="sources-count">0 / 0</dd>
        <dt>Artists processed</dt><dd id="artists-processed">0</dd>
        <dt>Artists saved</dt><dd id="artists-saved">0</dd>
        <dt>New artists</dt><dd id="new-artists">0</dd>
        <dt>Updated artists</dt><dd id="updated-artists">0</dd>
        <dt>Errors</dt><dd id="errors-count">0</dd>
        <dt>Current source</dt><dd id="current-source">-</dd>
        <dt>Started</dt><dd id="started-at">-</dd>
    </dl>
    <p id="status-error" class="status-error" hidden></p>
    <div class="button-row">
        <button class="button primary" id="start-phase1">Start Phase 1 (discovery)</button>
        <button class="button primary" id="start-phase2">Start Phase 2 (enrichment)</button>
        <button class="button" id="resume-tubebuddy">Resume TubeBuddy scoring</button>
        <button class="button danger" id="stop-process" hidden>Stop process</button>
    </div>
</section>

<section class="panel" id="quota-panel">
    <div class="toolbar">
        <h2>YouTube API quota</h2>
        <div>
            <button class="button" id="refresh-quota">Refresh</button>
            <button class="button" id="reset-quota">Reset keys</button>
        </div>
    </div>
    <div id="quota-content" class="quota-content">Loading...</div>
</section>

<section class="panel" id="opportunities-panel">
    <div class="toolbar">
        <h2>Top opportunities</h2>
        <a class="button" href="/">View all</a>
    </div>
    <ol id="top-opportunities" class="top-list"></ol>
</section>
"#;
