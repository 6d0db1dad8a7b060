//! Artists page handler - every artist with its latest metrics

use axum::{extract::State, response::Html};
use collector_common::format::{format_compact, format_datetime, format_score, ScoreBand};
use collector_common::models::Artist;
use tracing::error;

use super::{error_panel, escape_html, layout, Nav};
use crate::api::artists::{DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::AppState;

/// GET /artists
pub async fn artists_page(State(state): State<AppState>) -> Html<String> {
    let result = state
        .backend
        .get_as::<Vec<Artist>>(
            "/artists",
            &[
                ("skip", DEFAULT_SKIP.to_string()),
                ("limit", DEFAULT_LIMIT.to_string()),
            ],
        )
        .await;

    let content = match result {
        Ok(artists) => render_artists(&artists),
        Err(e) => {
            error!("Failed to fetch artists: {}", e);
            error_panel("Failed to fetch artists", "/artists")
        }
    };

    layout(
        "Artists",
        "Collected artists and their platform metrics",
        Nav::Artists,
        &content,
        Some("/static/artists.js"),
    )
}

fn render_artists(artists: &[Artist]) -> String {
    if artists.is_empty() {
        return r#"<div class="empty-state">
    <h3>No artists yet</h3>
    <p>Collected artists will appear here.</p>
    <a class="button" href="/collect">Collect artists</a>
</div>"#
            .to_string();
    }

    let rows: String = artists.iter().map(render_row).collect();

    format!(
        r#"<div class="toolbar">
    <h2>Artists ({count})</h2>
    <span id="refresh-message" class="message" hidden></span>
</div>
<table class="data-table">
    <thead>
        <tr>
            <th>Name</th>
            <th>Score</th>
            <th>Spotify followers</th>
            <th>Popularity</th>
            <th>Monthly listeners</th>
            <th>YouTube subscribers</th>
            <th>YouTube views</th>
            <th>Genre</th>
            <th>Last updated</th>
            <th>Links</th>
            <th></th>
        </tr>
    </thead>
    <tbody>
{rows}    </tbody>
</table>"#,
        count = artists.len(),
        rows = rows,
    )
}

fn render_row(artist: &Artist) -> String {
    let score = match artist.score {
        Some(score) => format!(
            r#"<span class="score-badge {}">{}</span>"#,
            ScoreBand::for_score(score).css_class(),
            format_score(score)
        ),
        None => "-".to_string(),
    };

    let popularity = artist
        .spotify_popularity
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let metric = |value: Option<u64>| value.map(format_compact).unwrap_or_else(|| "-".to_string());

    let updated = artist
        .updated_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "Never".to_string());

    let mut links = Vec::new();
    if let Some(url) = artist.spotify_url() {
        links.push(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Spotify</a>"#,
            escape_html(&url)
        ));
    }
    if let Some(url) = artist.youtube_url() {
        links.push(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">YouTube</a>"#,
            escape_html(&url)
        ));
    }

    format!(
        r#"        <tr>
            <td>{name}</td>
            <td>{score}</td>
            <td>{followers}</td>
            <td>{popularity}</td>
            <td>{listeners}</td>
            <td>{subscribers}</td>
            <td>{views}</td>
            <td>{genre}</td>
            <td>{updated}</td>
            <td class="links">{links}</td>
            <td><button class="button refresh-button" data-artist-id="{id}">Refresh</button></td>
        </tr>
"#,
        name = escape_html(&artist.name),
        score = score,
        followers = metric(artist.spotify_followers),
        popularity = popularity,
        listeners = metric(artist.monthly_listeners),
        subscribers = metric(artist.youtube_subscribers),
        views = metric(artist.youtube_views),
        genre = escape_html(&artist.genre),
        updated = escape_html(&updated),
        links = links.join(" "),
        id = artist.id,
    )
}
