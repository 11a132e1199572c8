use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::user::UserType;
use crate::store::{normalize_email, PortalStore};

/// A job seeker's application joined with the posting it targets.
#[derive(Debug, Clone, Serialize)]
pub struct JobseekerApplication {
    #[serde(flatten)]
    pub application: Application,
    pub title: String,
    pub location: String,
    #[serde(rename = "employmentType")]
    pub employment_type: String,
}

/// An application to one of the recruiter's postings, joined with the applicant.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterApplication {
    #[serde(flatten)]
    pub application: Application,
    pub title: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl PortalStore {
    /// Records an application. The job must exist and the job seeker may
    /// apply to it only once.
    pub async fn apply(&self, job_id: u32, jobseeker_email: &str) -> Result<Application, AppError> {
        let email = normalize_email(jobseeker_email);
        let mut inner = self.inner.write().await;

        if !inner.jobs.contains_key(&job_id) {
            return Err(AppError::NotFound("Job not found".to_string()));
        }
        if inner
            .applications
            .iter()
            .any(|a| a.job_id == job_id && a.jobseeker_email == email)
        {
            return Err(AppError::Duplicate(
                "You have already applied for this job".to_string(),
            ));
        }

        let application = Application {
            id: inner.next_application_id,
            job_id,
            jobseeker_email: email,
            application_date: Utc::now(),
            status: ApplicationStatus::Applied,
        };
        inner.next_application_id += 1;
        inner.applications.push(application.clone());

        info!(
            "Application {} from {} for job {}",
            application.id, application.jobseeker_email, job_id
        );
        Ok(application)
    }

    pub async fn applications_for_jobseeker(&self, jobseeker_email: &str) -> Vec<JobseekerApplication> {
        let email = normalize_email(jobseeker_email);
        let inner = self.inner.read().await;

        inner
            .applications
            .iter()
            .filter(|a| a.jobseeker_email == email)
            .filter_map(|a| {
                let job = inner.jobs.get(&a.job_id)?;
                Some(JobseekerApplication {
                    application: a.clone(),
                    title: job.title.clone(),
                    location: job.location.clone(),
                    employment_type: job.employment_type.clone(),
                })
            })
            .collect()
    }

    pub async fn applications_for_recruiter(&self, recruiter_email: &str) -> Vec<RecruiterApplication> {
        let email = normalize_email(recruiter_email);
        let inner = self.inner.read().await;

        inner
            .applications
            .iter()
            .filter_map(|a| {
                let job = inner.jobs.get(&a.job_id).filter(|j| j.recruiter_email == email)?;
                let applicant = inner
                    .accounts
                    .get(&(UserType::Jobseeker, a.jobseeker_email.clone()));
                Some(RecruiterApplication {
                    application: a.clone(),
                    title: job.title.clone(),
                    name: applicant.and_then(|acc| acc.name.clone()),
                    phone: applicant.and_then(|acc| acc.phone.clone()),
                })
            })
            .collect()
    }

    /// Sets an application's status. The application must target one of
    /// the recruiter's own postings.
    pub async fn update_application_status(
        &self,
        application_id: u32,
        recruiter_email: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        let email = normalize_email(recruiter_email);
        let mut inner = self.inner.write().await;
        let inner = &mut *inner;

        let application = inner
            .applications
            .iter_mut()
            .find(|a| a.id == application_id)
            .filter(|a| {
                inner
                    .jobs
                    .get(&a.job_id)
                    .is_some_and(|j| j.recruiter_email == email)
            })
            .ok_or_else(|| {
                AppError::NotFound(
                    "Application not found or you don't have permission to update it".to_string(),
                )
            })?;

        application.status = status;
        info!("Application {} set to {:?} by {}", application_id, status, email);
        Ok(application.clone())
    }
}
