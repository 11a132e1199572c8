use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{Job, JobInput};
use crate::models::user::{PublicUser, UserType};
use crate::recruiter::form::{job_input_from_fields, read_fields};
use crate::state::AppState;
use crate::store::applications::RecruiterApplication;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub user: PublicUser,
    pub posted_jobs: usize,
    pub shortlist_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponse {
    pub success: bool,
    pub message: String,
    pub job: Job,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationsResponse {
    pub success: bool,
    pub applications: Vec<RecruiterApplication>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub application: Application,
}

/// GET /recruiter/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<DashboardResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let account = state
        .store
        .find_account(UserType::Recruiter, &user.email)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let posted_jobs = state.store.jobs_by_recruiter(&user.email).await.len();
    let shortlist_size = state
        .sessions
        .with_shortlist(&user.token, |s| s.len())
        .await
        .unwrap_or_default();

    Ok(Json(DashboardResponse {
        success: true,
        user: account.public_view(),
        posted_jobs,
        shortlist_size,
    }))
}

/// POST /recruiter/jobs (multipart form)
pub async fn handle_create_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<JobResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let fields = read_fields(multipart?).await?;
    let input = job_input_from_fields(&fields)?;

    let job = state.store.insert_job(input, &user.email).await;
    Ok(Json(JobResponse {
        success: true,
        message: "Job posted successfully".to_string(),
        job,
    }))
}

/// GET /recruiter/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<JobsResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let jobs = state.store.jobs_by_recruiter(&user.email).await;
    Ok(Json(JobsResponse {
        success: true,
        jobs,
    }))
}

/// PUT /recruiter/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<u32>,
    AppJson(input): AppJson<JobInput>,
) -> Result<Json<JobResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let job = state
        .store
        .update_job(id, &user.email, input.validated()?)
        .await?;
    info!("Job {} updated by {}", id, user.email);
    Ok(Json(JobResponse {
        success: true,
        message: "Job updated successfully".to_string(),
        job,
    }))
}

/// DELETE /recruiter/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<u32>,
) -> Result<Json<DeleteResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    state.store.delete_job(id, &user.email).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Job deleted successfully".to_string(),
    }))
}

/// GET /recruiter/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApplicationsResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let applications = state.store.applications_for_recruiter(&user.email).await;
    Ok(Json(ApplicationsResponse {
        success: true,
        applications,
    }))
}

/// PUT /recruiter/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<u32>,
    AppJson(request): AppJson<StatusRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    user.require(UserType::Recruiter)?;
    let status: ApplicationStatus = request.status.parse()?;
    let application = state
        .store
        .update_application_status(id, &user.email, status)
        .await?;
    Ok(Json(StatusResponse {
        success: true,
        application,
    }))
}
