//! Scoring: opportunity ranking, scoring job status and resume

use axum::{
    extract::{Query, State},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::proxy::{forward_get, forward_post};
use crate::{ApiResult, AppState};

/// Default number of opportunities returned
pub const DEFAULT_OPPORTUNITY_LIMIT: &str = "20";

/// Query parameters for the opportunity ranking
#[derive(Debug, Deserialize)]
pub struct OpportunityQuery {
    #[serde(default = "default_limit")]
    pub limit: String,
}

fn default_limit() -> String {
    DEFAULT_OPPORTUNITY_LIMIT.to_string()
}

/// GET /api/opportunities → `/scoring/opportunities?limit=`
pub async fn list_opportunities(
    State(state): State<AppState>,
    Query(query): Query<OpportunityQuery>,
) -> ApiResult<Response> {
    forward_get(
        &state,
        "/scoring/opportunities",
        &[("limit", query.limit)],
        "fetch opportunities",
    )
    .await
}

/// GET /api/scoring/process-status → `/dashboard/process-status`
pub async fn process_status(State(state): State<AppState>) -> ApiResult<Response> {
    forward_get(&state, "/dashboard/process-status", &[], "fetch process status").await
}

/// POST /api/scoring/resume-tubebuddy → `/dashboard/resume-tubebuddy-scoring`
pub async fn resume_tubebuddy(State(state): State<AppState>) -> ApiResult<Response> {
    forward_post(
        &state,
        "/dashboard/resume-tubebuddy-scoring",
        None,
        "resume TubeBuddy scoring",
    )
    .await
}

/// Build scoring routes
pub fn scoring_routes() -> Router<AppState> {
    Router::new()
        .route("/api/opportunities", get(list_opportunities))
        .route("/api/scoring/process-status", get(process_status))
        .route("/api/scoring/resume-tubebuddy", post(resume_tubebuddy))
}
