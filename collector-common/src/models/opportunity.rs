//! Ranked opportunity view computed by the backend on each request

use serde::{Deserialize, Serialize};

/// Scoring sub-components, each on a 0-100 scale
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub search_volume_score: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub competition_score: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub optimization_score: f64,
}

/// A scored artist candidate
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Opportunity {
    pub artist_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub recommendation: String,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub youtube_channel_id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub spotify_followers: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub youtube_subscribers: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub spotify_popularity: u32,
    /// Backend serializes the breakdown under the scoring tool's name
    #[serde(
        rename = "tubebuddy_details",
        default,
        deserialize_with = "super::null_as_default"
    )]
    pub breakdown: ScoreBreakdown,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub score_date: Option<String>,
}

/// Envelope returned by `/scoring/opportunities`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OpportunitiesResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_opportunities: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub opportunities: Vec<Opportunity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_with_breakdown() {
        let response: OpportunitiesResponse = serde_json::from_value(json!({
            "total_opportunities": 1,
            "opportunities": [{
                "artist_id": 3,
                "name": "Lil Tecca",
                "score": 82.35,
                "category": "Excellent",
                "recommendation": "Produce now",
                "spotify_followers": 1500000,
                "youtube_subscribers": 2300,
                "spotify_popularity": 71,
                "tubebuddy_details": {
                    "search_volume_score": 90,
                    "competition_score": 40.5,
                    "optimization_score": 66
                }
            }]
        }))
        .unwrap();

        let opp = &response.opportunities[0];
        assert_eq!(opp.artist_id, 3);
        assert_eq!(opp.breakdown.search_volume_score, 90.0);
        assert_eq!(opp.breakdown.competition_score, 40.5);
        assert!(opp.score_date.is_none());
    }

    #[test]
    fn test_missing_breakdown_defaults_to_zero() {
        let opp: Opportunity = serde_json::from_value(json!({
            "artist_id": 1,
            "name": "Nobody",
            "tubebuddy_details": null,
            "spotify_followers": null
        }))
        .unwrap();

        assert_eq!(opp.breakdown, ScoreBreakdown::default());
        assert_eq!(opp.spotify_followers, 0);
    }
}
