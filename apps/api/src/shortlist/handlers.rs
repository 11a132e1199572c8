use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::UserType;
use crate::shortlist::{AddOutcome, Shortlist, ShortlistRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub candidate_id: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClearRequest {
    pub confirmed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortlistResponse {
    pub success: bool,
    pub size: usize,
    pub candidates: Vec<ShortlistRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: bool,
    pub added: bool,
    pub message: String,
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeResponse {
    pub success: bool,
    pub changed: bool,
    pub size: usize,
}

/// Runs `f` on the caller's shortlist after checking the recruiter role.
/// A session revoked between the middleware and here reads as unauthorized.
async fn with_caller_shortlist<R>(
    state: &AppState,
    user: &CurrentUser,
    f: impl FnOnce(&mut Shortlist) -> R,
) -> Result<R, AppError> {
    user.require(UserType::Recruiter)?;
    state
        .sessions
        .with_shortlist(&user.token, f)
        .await
        .ok_or_else(AppError::invalid_credentials)
}

/// GET /recruiter/shortlist
pub async fn handle_get_shortlist(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let candidates = with_caller_shortlist(&state, &user, |s| s.render()).await?;
    Ok(Json(ShortlistResponse {
        success: true,
        size: candidates.len(),
        candidates,
    }))
}

/// POST /recruiter/shortlist
pub async fn handle_add_to_shortlist(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<AddRequest>,
) -> Result<Json<AddResponse>, AppError> {
    user.require(UserType::Recruiter)?;

    let candidate = state
        .store
        .find_candidate(request.candidate_id)
        .await
        .ok_or_else(|| {
            AppError::NotFound(format!("Candidate {} not found", request.candidate_id))
        })?;
    let name = candidate.name.clone();

    let (outcome, size) =
        with_caller_shortlist(&state, &user, |s| (s.add(candidate), s.len())).await?;
    if outcome == AddOutcome::Added {
        info!("{} shortlisted candidate {}", user.email, request.candidate_id);
    }

    Ok(Json(AddResponse {
        success: true,
        added: outcome == AddOutcome::Added,
        message: outcome.message(&name),
        size,
    }))
}

/// DELETE /recruiter/shortlist/:id
pub async fn handle_remove_from_shortlist(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(candidate_id): Path<u32>,
) -> Result<Json<ChangeResponse>, AppError> {
    let (changed, size) =
        with_caller_shortlist(&state, &user, |s| (s.remove(candidate_id), s.len())).await?;
    Ok(Json(ChangeResponse {
        success: true,
        changed,
        size,
    }))
}

/// POST /recruiter/shortlist/clear
pub async fn handle_clear_shortlist(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<ClearRequest>,
) -> Result<Json<ChangeResponse>, AppError> {
    let (changed, size) =
        with_caller_shortlist(&state, &user, |s| (s.clear(request.confirmed), s.len())).await?;
    if changed {
        info!("{} cleared their shortlist", user.email);
    }
    Ok(Json(ChangeResponse {
        success: true,
        changed,
        size,
    }))
}
