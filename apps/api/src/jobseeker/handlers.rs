use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::{Account, JobseekerProfile, ProfileUpdate, PublicUser, UserType};
use crate::resume::generate_resume_text;
use crate::state::AppState;
use crate::store::applications::JobseekerApplication;

const DASHBOARD_RECENT_JOBS: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub user: PublicUser,
    pub recent_jobs: Vec<Job>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: JobseekerProfile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub success: bool,
    pub skills: Vec<String>,
}

/// `jobseeker_email` and `application_date` are accepted in any JSON shape
/// for older clients and never read; the session email and the current
/// time win.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: u32,
    #[serde(default)]
    pub jobseeker_email: Option<Value>,
    #[serde(default)]
    pub application_date: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
    pub application: Application,
}

#[derive(Debug, Serialize)]
pub struct ApplicationsResponse {
    pub success: bool,
    pub applications: Vec<JobseekerApplication>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub resume: String,
}

async fn caller_account(state: &AppState, user: &CurrentUser) -> Result<Account, AppError> {
    user.require(UserType::Jobseeker)?;
    state
        .store
        .find_account(UserType::Jobseeker, &user.email)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// GET /jobseeker/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<DashboardResponse>, AppError> {
    let account = caller_account(&state, &user).await?;
    let recent_jobs = state.store.recent_jobs(DASHBOARD_RECENT_JOBS).await;
    Ok(Json(DashboardResponse {
        success: true,
        user: account.public_view(),
        recent_jobs,
    }))
}

/// GET /jobseeker/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ProfileResponse>, AppError> {
    let account = caller_account(&state, &user).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile: account.profile,
    }))
}

/// PUT /jobseeker/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    user.require(UserType::Jobseeker)?;
    update.validate()?;

    let profile = state.store.update_profile(&user.email, update).await?;
    info!("Profile updated for {}", user.email);
    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

/// PUT /jobseeker/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<SkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    user.require(UserType::Jobseeker)?;
    let skills = state.store.update_skills(&user.email, request.skills).await?;
    Ok(Json(SkillsResponse {
        success: true,
        skills,
    }))
}

/// POST /jobseeker/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(request): AppJson<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    user.require(UserType::Jobseeker)?;
    if request.jobseeker_email.is_some() || request.application_date.is_some() {
        debug!(
            "ignoring client-supplied email {:?} and date {:?} for {}",
            request.jobseeker_email, request.application_date, user.email
        );
    }

    let application = state.store.apply(request.job_id, &user.email).await?;
    Ok(Json(ApplyResponse {
        success: true,
        message: "Application submitted successfully".to_string(),
        application,
    }))
}

/// GET /jobseeker/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApplicationsResponse>, AppError> {
    user.require(UserType::Jobseeker)?;
    let applications = state.store.applications_for_jobseeker(&user.email).await;
    Ok(Json(ApplicationsResponse {
        success: true,
        applications,
    }))
}

/// GET /jobseeker/resume
pub async fn handle_resume(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ResumeResponse>, AppError> {
    let account = caller_account(&state, &user).await?;
    let resume = generate_resume_text(&account)?;
    Ok(Json(ResumeResponse {
        success: true,
        resume,
    }))
}
