//! Artist listing, count and per-artist score refresh

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::proxy::{forward_get, forward_post};
use crate::{ApiError, ApiResult, AppState};

/// Default page offset for the artist list
pub const DEFAULT_SKIP: &str = "0";
/// Default page size for the artist list
pub const DEFAULT_LIMIT: &str = "100";

/// Query parameters for the artist list
#[derive(Debug, Deserialize)]
pub struct ArtistListQuery {
    #[serde(default = "default_skip")]
    pub skip: String,
    #[serde(default = "default_limit")]
    pub limit: String,
}

fn default_skip() -> String {
    DEFAULT_SKIP.to_string()
}

fn default_limit() -> String {
    DEFAULT_LIMIT.to_string()
}

/// GET /api/artists → `/artists?skip=&limit=`
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ArtistListQuery>,
) -> ApiResult<Response> {
    forward_get(
        &state,
        "/artists",
        &[("skip", query.skip), ("limit", query.limit)],
        "fetch artists",
    )
    .await
}

/// GET /api/artists/count → `/artists/count`
pub async fn count_artists(State(state): State<AppState>) -> ApiResult<Response> {
    forward_get(&state, "/artists/count", &[], "fetch artist count").await
}

/// POST /api/refresh/:id → `/scoring/refresh/{id}`
pub async fn refresh_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Response> {
    let artist_id: i64 = artist_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid artist id: {}", artist_id)))?;
    let path = format!("/scoring/refresh/{}", artist_id);
    forward_post(&state, &path, None, "refresh artist data").await
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/api/artists", get(list_artists))
        .route("/api/artists/count", get(count_artists))
        .route("/api/refresh/:id", post(refresh_artist))
}
