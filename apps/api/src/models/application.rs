use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    InterviewScheduled,
    Rejected,
    Hired,
}

impl FromStr for ApplicationStatus {
    type Err = AppError;

    /// Accepts snake_case as well as the display spellings recruiters type,
    /// e.g. "Interview Scheduled".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "interview_scheduled" => Ok(ApplicationStatus::InterviewScheduled),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "hired" => Ok(ApplicationStatus::Hired),
            _ => Err(AppError::Validation(format!(
                "Unknown application status '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub job_id: u32,
    pub jobseeker_email: String,
    pub application_date: DateTime<Utc>,
    pub status: ApplicationStatus,
}
