//! Opportunities page handler - landing page with ranked artist cards

use axum::{extract::State, response::Html};
use collector_common::format::{format_compact, format_date, format_score, ScoreBand};
use collector_common::models::{OpportunitiesResponse, Opportunity};
use tracing::error;

use super::{error_panel, escape_html, layout, Nav};
use crate::api::scoring::DEFAULT_OPPORTUNITY_LIMIT;
use crate::AppState;

/// GET /
pub async fn opportunities_page(State(state): State<AppState>) -> Html<String> {
    let result = state
        .backend
        .get_as::<OpportunitiesResponse>(
            "/scoring/opportunities",
            &[("limit", DEFAULT_OPPORTUNITY_LIMIT.to_string())],
        )
        .await;

    let content = match result {
        Ok(response) => render_opportunities(&response.opportunities),
        Err(e) => {
            error!("Failed to fetch opportunities: {}", e);
            error_panel("Failed to fetch opportunities", "/")
        }
    };

    layout(
        "Artists Collector Dashboard",
        "Best emerging hip-hop artist opportunities for type beats",
        Nav::Opportunities,
        &content,
        None,
    )
}

fn render_opportunities(opportunities: &[Opportunity]) -> String {
    let toolbar = format!(
        r#"<div class="toolbar">
    <h2>Top opportunities ({})</h2>
    <div>
        <a class="button" href="/extraction">Extraction control</a>
        <a class="button" href="/">Refresh</a>
    </div>
</div>"#,
        opportunities.len()
    );

    if opportunities.is_empty() {
        return format!(
            r#"{}
<div class="empty-state">
    <h3>No opportunities found</h3>
    <p>Start by collecting artist data.</p>
    <a class="button" href="/collect">Collect artists</a>
</div>"#,
            toolbar
        );
    }

    let cards: String = opportunities.iter().map(render_card).collect();
    format!("{}\n<div class=\"card-grid\">\n{}</div>", toolbar, cards)
}

fn render_card(opp: &Opportunity) -> String {
    let band = ScoreBand::for_score(opp.score);

    let mut links = String::new();
    if let Some(id) = opp.spotify_id.as_deref().filter(|id| !id.is_empty()) {
        links.push_str(&format!(
            r#"<a class="button spotify" href="https://open.spotify.com/artist/{}" target="_blank" rel="noopener noreferrer">Spotify</a>"#,
            escape_html(id)
        ));
    }
    if let Some(id) = opp.youtube_channel_id.as_deref().filter(|id| !id.is_empty()) {
        links.push_str(&format!(
            r#"<a class="button youtube" href="https://youtube.com/channel/{}" target="_blank" rel="noopener noreferrer">YouTube</a>"#,
            escape_html(id)
        ));
    }

    let mut dates = String::new();
    if let Some(updated) = &opp.updated_at {
        dates.push_str(&format!("<div>Data updated: {}</div>", escape_html(&format_date(updated))));
    }
    if let Some(scored) = &opp.score_date {
        dates.push_str(&format!("<div>Score computed: {}</div>", escape_html(&format_date(scored))));
    }

    format!(
        r#"<div class="card">
    <div class="card-header">
        <h3>{name}</h3>
        <span class="score-badge {band}">{score}</span>
    </div>
    <dl class="metrics">
        <dt>Search volume</dt><dd>{search:.1}/100</dd>
        <dt>Competition</dt><dd>{competition:.1}/100</dd>
        <dt>Optimization</dt><dd>{optimization:.1}/100</dd>
        <dt>Spotify followers</dt><dd>{followers}</dd>
        <dt>YouTube subscribers</dt><dd>{subscribers}</dd>
    </dl>
    <span class="category">{category}</span>
    <p class="recommendation">{recommendation}</p>
    <div class="links">{links}</div>
    <div class="dates">{dates}</div>
</div>
"#,
        name = escape_html(&opp.name),
        band = band.css_class(),
        score = format_score(opp.score),
        search = opp.breakdown.search_volume_score,
        competition = opp.breakdown.competition_score,
        optimization = opp.breakdown.optimization_score,
        followers = format_compact(opp.spotify_followers),
        subscribers = format_compact(opp.youtube_subscribers),
        category = escape_html(&opp.category),
        recommendation = escape_html(&opp.recommendation),
        links = links,
        dates = dates,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use collector_common::models::ScoreBreakdown;

    fn opportunity(name: &str, score: f64) -> Opportunity {
        Opportunity {
            artist_id: 1,
            name: name.to_string(),
            score,
            category: "Rising".to_string(),
            recommendation: "Produce now".to_string(),
            spotify_id: Some("abc".to_string()),
            youtube_channel_id: None,
            spotify_followers: 1_500_000,
            youtube_subscribers: 2_300,
            spotify_popularity: 60,
            breakdown: ScoreBreakdown {
                search_volume_score: 90.0,
                competition_score: 40.5,
                optimization_score: 70.0,
            },
            updated_at: Some("2025-03-14T09:26:53".to_string()),
            score_date: None,
        }
    }

    #[test]
    fn test_card_content() {
        let card = render_card(&opportunity("Lil <Tecca>", 82.0));
        assert!(card.contains("Lil &lt;Tecca&gt;"));
        assert!(card.contains("score-excellent"));
        assert!(card.contains(">82.0<"));
        assert!(card.contains("1.5M"));
        assert!(card.contains("2.3K"));
        assert!(card.contains("90.0/100"));
        assert!(card.contains("40.5/100"));
        assert!(card.contains("https://open.spotify.com/artist/abc"));
        assert!(!card.contains("youtube.com/channel"));
        assert!(card.contains("Data updated: 2025-03-14"));
        assert!(!card.contains("Score computed"));
    }

    #[test]
    fn test_empty_state() {
        let html = render_opportunities(&[]);
        assert!(html.contains("Top opportunities (0)"));
        assert!(html.contains("No opportunities found"));
    }

    #[test]
    fn test_count_in_toolbar() {
        let html = render_opportunities(&[opportunity("A", 10.0), opportunity("B", 55.0)]);
        assert!(html.contains("Top opportunities (2)"));
        assert!(html.contains("score-poor"));
        assert!(html.contains("score-fair"));
    }
}
