use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::normalize_skills;

/// A job posting. Salary and employment-type fields keep the camelCase
/// names the portal front-end already sends and reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub recruiter_email: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "employmentType")]
    pub employment_type: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(rename = "minSalary")]
    pub min_salary: u64,
    #[serde(rename = "maxSalary")]
    pub max_salary: u64,
    pub created_at: DateTime<Utc>,
}

/// Fields a recruiter supplies when creating or updating a posting.
#[derive(Debug, Clone, Deserialize)]
pub struct JobInput {
    pub title: String,
    pub location: String,
    #[serde(rename = "employmentType")]
    pub employment_type: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(rename = "minSalary")]
    pub min_salary: u64,
    #[serde(rename = "maxSalary")]
    pub max_salary: u64,
}

impl JobInput {
    /// Checks required fields and the salary range, and normalizes skills.
    pub fn validated(mut self) -> Result<JobInput, AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("location", &self.location),
            ("employmentType", &self.employment_type),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }

        if self.min_salary > self.max_salary {
            return Err(AppError::Validation(
                "minSalary cannot exceed maxSalary".to_string(),
            ));
        }

        self.title = self.title.trim().to_string();
        self.location = self.location.trim().to_string();
        self.employment_type = self.employment_type.trim().to_string();
        self.skills = normalize_skills(self.skills);
        Ok(self)
    }

    pub fn into_job(self, id: u32, recruiter_email: &str) -> Job {
        Job {
            id,
            recruiter_email: recruiter_email.to_string(),
            title: self.title,
            location: self.location,
            employment_type: self.employment_type,
            description: self.description,
            skills: self.skills,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            created_at: Utc::now(),
        }
    }
}

/// A job paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(rename = "match")]
    pub match_score: u32,
}

/// Parses the `skills` form field: either a JSON array of strings or a
/// comma-separated list.
pub fn parse_skills_field(raw: &str) -> Result<Vec<String>, AppError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        let skills: Vec<String> = serde_json::from_str(trimmed)
            .map_err(|e| AppError::Validation(format!("skills must be a JSON list of strings: {e}")))?;
        return Ok(normalize_skills(skills));
    }
    Ok(normalize_skills(
        trimmed.split(',').map(|s| s.to_string()).collect(),
    ))
}
