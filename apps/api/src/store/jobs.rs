use tracing::info;

use crate::errors::AppError;
use crate::matching::fixtures::sample_jobs;
use crate::models::job::{Job, JobInput};
use crate::store::{normalize_email, PortalStore};

/// Recruiter that owns the seeded sample postings.
pub const SAMPLE_RECRUITER_EMAIL: &str = "talent@portal.example";

impl PortalStore {
    /// Stores a validated posting and returns it with its new id.
    pub async fn insert_job(&self, input: JobInput, recruiter_email: &str) -> Job {
        let mut inner = self.inner.write().await;
        let id = inner.next_job_id;
        inner.next_job_id += 1;

        let job = input.into_job(id, &normalize_email(recruiter_email));
        inner.jobs.insert(id, job.clone());
        info!("Job {} '{}' posted by {}", id, job.title, job.recruiter_email);
        job
    }

    pub async fn seed_sample_jobs(&self) -> usize {
        let jobs = sample_jobs();
        let count = jobs.len();
        for input in jobs {
            self.insert_job(input, SAMPLE_RECRUITER_EMAIL).await;
        }
        count
    }

    pub async fn get_job(&self, id: u32) -> Option<Job> {
        self.inner.read().await.jobs.get(&id).cloned()
    }

    /// All postings, newest first.
    pub async fn list_jobs(&self) -> Vec<Job> {
        self.inner.read().await.jobs.values().rev().cloned().collect()
    }

    pub async fn recent_jobs(&self, limit: usize) -> Vec<Job> {
        let inner = self.inner.read().await;
        inner.jobs.values().rev().take(limit).cloned().collect()
    }

    pub async fn jobs_by_recruiter(&self, recruiter_email: &str) -> Vec<Job> {
        let email = normalize_email(recruiter_email);
        let inner = self.inner.read().await;
        inner
            .jobs
            .values()
            .filter(|j| j.recruiter_email == email)
            .cloned()
            .collect()
    }

    /// Replaces a posting's fields. Only the owning recruiter may update it.
    pub async fn update_job(
        &self,
        id: u32,
        recruiter_email: &str,
        input: JobInput,
    ) -> Result<Job, AppError> {
        let email = normalize_email(recruiter_email);
        let mut inner = self.inner.write().await;

        let existing = inner
            .jobs
            .get_mut(&id)
            .filter(|j| j.recruiter_email == email)
            .ok_or_else(not_owned)?;

        let created_at = existing.created_at;
        *existing = Job {
            created_at,
            ..input.into_job(id, &email)
        };
        Ok(existing.clone())
    }

    /// Deletes a posting and its applications. Only the owner may delete it.
    pub async fn delete_job(&self, id: u32, recruiter_email: &str) -> Result<(), AppError> {
        let email = normalize_email(recruiter_email);
        let mut inner = self.inner.write().await;

        match inner.jobs.get(&id) {
            Some(job) if job.recruiter_email == email => {}
            _ => return Err(not_owned()),
        }

        inner.jobs.remove(&id);
        let before = inner.applications.len();
        inner.applications.retain(|a| a.job_id != id);
        info!(
            "Job {} deleted by {} ({} applications dropped)",
            id,
            email,
            before - inner.applications.len()
        );
        Ok(())
    }
}

fn not_owned() -> AppError {
    AppError::NotFound("Job not found or you don't have permission to modify it".to_string())
}
