//! Typed HTTP client for the portal API.
//!
//! Every call validates its input before touching the network, and maps
//! failures onto the three kinds in [`ClientError`]: validation, network,
//! and server rejection.

pub mod app;
pub mod error;
pub mod session;

use reqwest::{multipart::Form, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::auth::handlers::{AuthResponse, MessageResponse, VerifyTokenResponse};
use crate::jobseeker::handlers::{ApplyResponse, DashboardResponse as JobseekerDashboard};
use crate::models::application::Application;
use crate::models::candidate::ScoredCandidate;
use crate::models::job::{Job, JobInput, ScoredJob};
use crate::models::user::UserType;
use crate::recruiter::handlers::{DashboardResponse as RecruiterDashboard, JobResponse};
use crate::search::handlers::SearchResponse;
use crate::shortlist::handlers::{AddResponse, ChangeResponse, ShortlistResponse};

pub use app::PortalApp;
pub use error::ClientError;
pub use session::{ClientSession, FileSessionStore, MemorySessionStore, SessionStore};

/// Registration form as the client collects it.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and decodes a 2xx body as `T`. Non-2xx bodies are
    /// mined for `detail`; anything else falls back to a generic message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::network)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            warn!("portal rejected request ({}): {}", status.as_u16(), detail);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn authed(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token)
    }

    // ── Accounts ────────────────────────────────────────────────────────────

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<ClientSession, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter your email and password".to_string(),
            ));
        }

        let body = json!({
            "userEmail": email.trim(),
            "password": password,
            "userType": user_type,
        });
        let response: AuthResponse = self
            .send(self.client.post(self.url("/login")).json(&body))
            .await?;
        debug!("logged in as {}", response.user.email);
        Ok(session_from(response))
    }

    pub async fn register(&self, registration: &Registration) -> Result<ClientSession, ClientError> {
        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter your email and password".to_string(),
            ));
        }
        if !registration.email.contains('@') {
            return Err(ClientError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        let response: AuthResponse = self
            .send(self.client.post(self.url("/register")).json(registration))
            .await?;
        Ok(session_from(response))
    }

    pub async fn verify_token(&self, token: &str) -> Result<VerifyTokenResponse, ClientError> {
        self.send(self.authed(self.client.get(self.url("/verify-token")), token))
            .await
    }

    pub async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .send(self.authed(self.client.post(self.url("/logout")), token))
            .await?;
        Ok(())
    }

    // ── Search ──────────────────────────────────────────────────────────────

    pub async fn search_candidates(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<ScoredCandidate>, ClientError> {
        let query = require_query(query)?;
        let response: SearchResponse<ScoredCandidate> = self
            .send(
                self.authed(self.client.post(self.url("/search/candidates")), token)
                    .json(&json!({ "query": query })),
            )
            .await?;
        Ok(response.results)
    }

    pub async fn search_jobs(&self, token: &str, query: &str) -> Result<Vec<ScoredJob>, ClientError> {
        let query = require_query(query)?;
        let response: SearchResponse<ScoredJob> = self
            .send(
                self.authed(self.client.post(self.url("/search/jobs")), token)
                    .json(&json!({ "query": query })),
            )
            .await?;
        Ok(response.results)
    }

    // ── Dashboards ──────────────────────────────────────────────────────────

    pub async fn jobseeker_dashboard(&self, token: &str) -> Result<JobseekerDashboard, ClientError> {
        self.send(self.authed(self.client.get(self.url("/jobseeker/dashboard")), token))
            .await
    }

    pub async fn recruiter_dashboard(&self, token: &str) -> Result<RecruiterDashboard, ClientError> {
        self.send(self.authed(self.client.get(self.url("/recruiter/dashboard")), token))
            .await
    }

    // ── Jobs and applications ───────────────────────────────────────────────

    pub async fn apply(&self, token: &str, job_id: u32) -> Result<Application, ClientError> {
        let response: ApplyResponse = self
            .send(
                self.authed(self.client.post(self.url("/jobseeker/apply")), token)
                    .json(&json!({ "job_id": job_id })),
            )
            .await?;
        Ok(response.application)
    }

    /// Posts a job as a multipart form; `skills` travel as a JSON array string.
    pub async fn post_job(&self, token: &str, job: &JobInput) -> Result<Job, ClientError> {
        if job.title.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a job title".to_string()));
        }
        if job.min_salary > job.max_salary {
            return Err(ClientError::Validation(
                "Minimum salary cannot exceed maximum salary".to_string(),
            ));
        }

        let skills = serde_json::to_string(&job.skills)
            .map_err(|e| ClientError::Validation(format!("Invalid skills list: {e}")))?;
        let form = Form::new()
            .text("title", job.title.clone())
            .text("location", job.location.clone())
            .text("employmentType", job.employment_type.clone())
            .text("description", job.description.clone())
            .text("skills", skills)
            .text("minSalary", job.min_salary.to_string())
            .text("maxSalary", job.max_salary.to_string());

        let response: JobResponse = self
            .send(
                self.authed(self.client.post(self.url("/recruiter/jobs")), token)
                    .multipart(form),
            )
            .await?;
        Ok(response.job)
    }

    // ── Shortlist ───────────────────────────────────────────────────────────

    pub async fn shortlist(&self, token: &str) -> Result<ShortlistResponse, ClientError> {
        self.send(self.authed(self.client.get(self.url("/recruiter/shortlist")), token))
            .await
    }

    pub async fn shortlist_add(&self, token: &str, candidate_id: u32) -> Result<AddResponse, ClientError> {
        self.send(
            self.authed(self.client.post(self.url("/recruiter/shortlist")), token)
                .json(&json!({ "candidate_id": candidate_id })),
        )
        .await
    }

    pub async fn shortlist_remove(
        &self,
        token: &str,
        candidate_id: u32,
    ) -> Result<ChangeResponse, ClientError> {
        let path = format!("/recruiter/shortlist/{candidate_id}");
        self.send(self.authed(self.client.delete(self.url(&path)), token))
            .await
    }

    /// Clears the shortlist. Without confirmation nothing is sent.
    pub async fn shortlist_clear(
        &self,
        token: &str,
        confirmed: bool,
    ) -> Result<ChangeResponse, ClientError> {
        if !confirmed {
            return Err(ClientError::Validation(
                "Confirm before clearing the shortlist".to_string(),
            ));
        }
        self.send(
            self.authed(self.client.post(self.url("/recruiter/shortlist/clear")), token)
                .json(&json!({ "confirmed": true })),
        )
        .await
    }
}

fn require_query(query: &str) -> Result<&str, ClientError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation(
            "Please enter a search query".to_string(),
        ));
    }
    Ok(trimmed)
}

fn session_from(response: AuthResponse) -> ClientSession {
    ClientSession {
        email: response.user.email,
        user_type: response.user.user_type,
        token: response.token,
    }
}
