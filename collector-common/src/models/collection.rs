//! Artist collection result envelopes

use serde::{Deserialize, Serialize};

/// Outcome of collecting one artist
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CollectionResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub success: bool,
    pub artist_name: String,
    #[serde(default)]
    pub artist_id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub spotify_data_collected: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub youtube_data_collected: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub errors: Vec<String>,
}

/// Per-artist status inside a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionOutcome {
    Success,
    Failed,
    Error,
}

/// One entry of `artists_processed`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BatchArtistOutcome {
    pub name: String,
    #[serde(default)]
    pub artist_id: Option<i64>,
    pub status: CollectionOutcome,
    #[serde(default)]
    pub spotify_collected: Option<bool>,
    #[serde(default)]
    pub youtube_collected: Option<bool>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BatchArtistOutcome {
    /// Single error line: `error` wins over the joined `errors` list
    pub fn error_summary(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Some(error.clone());
        }
        self.errors
            .as_ref()
            .filter(|errors| !errors.is_empty())
            .map(|errors| errors.join(", "))
    }
}

/// Outcome of collecting several artists
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BatchCollectionResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_artists: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub successful_collections: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub failed_collections: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub artists_processed: Vec<BatchArtistOutcome>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub errors: Vec<String>,
}
