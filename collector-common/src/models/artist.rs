//! Artist record as listed by the backend

use serde::{Deserialize, Serialize};

/// One artist with its latest platform metrics
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub youtube_channel_id: Option<String>,
    #[serde(default)]
    pub spotify_followers: Option<u64>,
    /// Spotify popularity index (0-100)
    #[serde(default)]
    pub spotify_popularity: Option<u32>,
    #[serde(default)]
    pub monthly_listeners: Option<u64>,
    #[serde(default)]
    pub youtube_subscribers: Option<u64>,
    #[serde(default)]
    pub youtube_views: Option<u64>,
    #[serde(default)]
    pub youtube_videos_count: Option<u64>,
    /// Opportunity score computed by the backend (0-100)
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub genre: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Artist {
    pub fn spotify_url(&self) -> Option<String> {
        self.spotify_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://open.spotify.com/artist/{}", id))
    }

    pub fn youtube_url(&self) -> Option<String> {
        self.youtube_channel_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://youtube.com/channel/{}", id))
    }
}
