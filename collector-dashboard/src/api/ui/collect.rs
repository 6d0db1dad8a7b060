//! Collect page handlers - single and batch artist collection forms
//!
//! Forms post back to `/collect`; the result is rendered above the forms.
//! A successful submission clears its input, a failed one keeps it.

use axum::{extract::State, response::Html, Form};
use collector_common::models::{
    BatchArtistOutcome, BatchCollectionResult, CollectionOutcome, CollectionResult,
};
use serde::Deserialize;
use tracing::error;

use super::{error_panel, escape_html, layout, Nav};
use crate::api::collect::{forward, parse_artist_names, CollectTarget};
use crate::backend::decode;
use crate::AppState;

/// Submitted form fields; each form sends only its own field
#[derive(Debug, Default, Deserialize)]
pub struct CollectForm {
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub artist_names: Option<String>,
}

/// Values to prefill the forms with
#[derive(Debug, Default)]
struct FormValues {
    artist_name: String,
    artist_names: String,
}

/// GET /collect
pub async fn collect_page() -> Html<String> {
    render_page("", &FormValues::default())
}

/// POST /collect
pub async fn collect_submit(
    State(state): State<AppState>,
    Form(form): Form<CollectForm>,
) -> Html<String> {
    let single = form.artist_name.as_deref().map(str::trim).unwrap_or_default();
    let batch = form.artist_names.as_deref().unwrap_or_default();

    let target = if !single.is_empty() {
        CollectTarget::Single(single.to_string())
    } else {
        let names = parse_artist_names(batch);
        if names.is_empty() {
            let message = r#"<div class="panel warning-panel"><p>Enter at least one artist name.</p></div>"#;
            return render_page(message, &FormValues::default());
        }
        CollectTarget::Batch(names)
    };

    let outcome = match forward(&state.backend, &target).await {
        Ok(reply) => match &target {
            CollectTarget::Single(_) => decode::<CollectionResult>(reply.body).map(|r| {
                let ok = r.success;
                (render_single(&r), ok)
            }),
            CollectTarget::Batch(_) => decode::<BatchCollectionResult>(reply.body).map(|r| {
                let ok = r.successful_collections > 0;
                (render_batch(&r), ok)
            }),
        },
        Err(e) => Err(e),
    };

    let (result_html, success) = match outcome {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("Collection failed: {}", e);
            match &target {
                CollectTarget::Single(name) => {
                    let failed = CollectionResult {
                        success: false,
                        artist_name: name.clone(),
                        errors: vec![e.detail().map(str::to_string).unwrap_or_else(|| e.to_string())],
                        ..CollectionResult::default()
                    };
                    (render_single(&failed), false)
                }
                CollectTarget::Batch(_) => {
                    (error_panel("Failed to collect artist data", "/collect"), false)
                }
            }
        }
    };

    let values = if success {
        FormValues::default()
    } else {
        FormValues {
            artist_name: form.artist_name.unwrap_or_default(),
            artist_names: form.artist_names.unwrap_or_default(),
        }
    };

    render_page(&result_html, &values)
}

fn render_page(result_html: &str, values: &FormValues) -> Html<String> {
    let content = format!(
        r#"{result}
<div class="form-grid">
    <form class="panel collect-form" method="post" action="/collect">
        <h2>Collect a single artist</h2>
        <label for="artist_name">Artist name</label>
        <input id="artist_name" name="artist_name" type="text" placeholder="e.g. Lil Tecca" value="{artist_name}" required>
        <button class="button primary" type="submit">Collect</button>
    </form>
    <form class="panel collect-form" method="post" action="/collect">
        <h2>Collect several artists</h2>
        <label for="artist_names">Artist names, one per line</label>
        <textarea id="artist_names" name="artist_names" rows="8" required>{artist_names}</textarea>
        <button class="button primary" type="submit">Collect all</button>
    </form>
</div>"#,
        result = result_html,
        artist_name = escape_html(&values.artist_name),
        artist_names = escape_html(&values.artist_names),
    );

    layout(
        "Collect Artists",
        "Gather Spotify and YouTube data for new artists",
        Nav::Collect,
        &content,
        Some("/static/collect.js"),
    )
}

fn check(collected: bool) -> &'static str {
    if collected {
        "&#10003;"
    } else {
        "&#10007;"
    }
}

fn render_single(result: &CollectionResult) -> String {
    let (class, heading) = if result.success {
        ("success-panel", "Collection complete")
    } else {
        ("error-panel", "Collection failed")
    };

    let artist_id = result
        .artist_id
        .map(|id| format!("<dt>Artist ID</dt><dd>{}</dd>", id))
        .unwrap_or_default();

    let errors = render_error_list(&result.errors);

    format!(
        r#"<div class="panel {class}">
    <h2>{heading}: {name}</h2>
    <dl class="metrics">
        {artist_id}
        <dt>Spotify data</dt><dd>{spotify}</dd>
        <dt>YouTube data</dt><dd>{youtube}</dd>
    </dl>
    {errors}
</div>"#,
        class = class,
        heading = heading,
        name = escape_html(&result.artist_name),
        artist_id = artist_id,
        spotify = check(result.spotify_data_collected),
        youtube = check(result.youtube_data_collected),
        errors = errors,
    )
}

fn render_batch(result: &BatchCollectionResult) -> String {
    let rows: String = result.artists_processed.iter().map(render_batch_row).collect();
    let class = if result.successful_collections > 0 {
        "success-panel"
    } else {
        "error-panel"
    };

    format!(
        r#"<div class="panel {class}">
    <h2>Batch collection complete</h2>
    <p>{total} artists: {ok} successful, {failed} failed</p>
    <table class="data-table">
        <thead>
            <tr><th>Name</th><th>Status</th><th>Spotify</th><th>YouTube</th><th>Errors</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
    {errors}
</div>"#,
        class = class,
        total = result.total_artists,
        ok = result.successful_collections,
        failed = result.failed_collections,
        rows = rows,
        errors = render_error_list(&result.errors),
    )
}

fn render_batch_row(outcome: &BatchArtistOutcome) -> String {
    let status = match outcome.status {
        CollectionOutcome::Success => r#"<span class="status status-completed">success</span>"#,
        CollectionOutcome::Failed => r#"<span class="status status-error">failed</span>"#,
        CollectionOutcome::Error => r#"<span class="status status-error">error</span>"#,
    };

    format!(
        "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&outcome.name),
        status,
        check(outcome.spotify_collected.unwrap_or(false)),
        check(outcome.youtube_collected.unwrap_or(false)),
        escape_html(&outcome.error_summary().unwrap_or_default()),
    )
}

fn render_error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape_html(e)))
        .collect();
    format!("<ul class=\"error-list\">{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failed_single() {
        let html = render_single(&CollectionResult {
            success: false,
            artist_name: "Nobody".to_string(),
            spotify_data_collected: true,
            errors: vec!["YouTube channel not found".to_string()],
            ..CollectionResult::default()
        });
        assert!(html.contains("error-panel"));
        assert!(html.contains("Collection failed: Nobody"));
        assert!(html.contains("<li>YouTube channel not found</li>"));
        assert!(!html.contains("Artist ID"));
    }

    #[test]
    fn test_render_batch_counts_and_rows() {
        let result = BatchCollectionResult {
            total_artists: 2,
            successful_collections: 1,
            failed_collections: 1,
            artists_processed: vec![BatchArtistOutcome {
                name: "Nobody".to_string(),
                artist_id: None,
                status: CollectionOutcome::Error,
                spotify_collected: None,
                youtube_collected: None,
                errors: None,
                error: Some("not found".to_string()),
            }],
            errors: vec![],
        };
        let html = render_batch(&result);
        assert!(html.contains("2 artists: 1 successful, 1 failed"));
        assert!(html.contains("<td>Nobody</td>"));
        assert!(html.contains("<td>not found</td>"));
        assert!(!html.contains("error-list"));
    }

    #[test]
    fn test_page_prefills_escaped_values() {
        let Html(page) = render_page(
            "",
            &FormValues {
                artist_name: "A \"B\"".to_string(),
                artist_names: "C\nD".to_string(),
            },
        );
        assert!(page.contains(r#"value="A &quot;B&quot;""#));
        assert!(page.contains(">C\nD</textarea>"));
    }
}
