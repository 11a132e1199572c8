use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::matching::query::require_query;
use crate::models::candidate::ScoredCandidate;
use crate::models::job::ScoredJob;
use crate::models::user::UserType;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    pub success: bool,
    pub results: Vec<T>,
    pub backend: String,
}

/// POST /search/candidates
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResponse<ScoredCandidate>>, AppError> {
    user.require(UserType::Recruiter)?;
    let query = require_query(&request.query)?;

    let snapshot = state.store.candidate_snapshot().await;
    let results = state.matcher.match_candidates(query, &snapshot);
    debug!(
        "candidate search '{}': {} of {} matched",
        query,
        results.len(),
        snapshot.len()
    );

    Ok(Json(SearchResponse {
        success: true,
        results,
        backend: state.matcher.backend().to_string(),
    }))
}

/// POST /search/jobs
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResponse<ScoredJob>>, AppError> {
    user.require(UserType::Jobseeker)?;
    let query = require_query(&request.query)?;

    let jobs = state.store.list_jobs().await;
    let results = state.matcher.match_jobs(query, &jobs);
    debug!("job search '{}': {} of {} matched", query, results.len(), jobs.len());

    Ok(Json(SearchResponse {
        success: true,
        results,
        backend: state.matcher.backend().to_string(),
    }))
}
