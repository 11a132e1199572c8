use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::password::PasswordDigest;
use crate::errors::AppError;

/// The two account roles. Serialized as `"jobseeker"` / `"recruiter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Jobseeker,
    Recruiter,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Jobseeker => "jobseeker",
            UserType::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jobseeker" | "job_seeker" => Ok(UserType::Jobseeker),
            "recruiter" => Ok(UserType::Recruiter),
            "" => Err(AppError::Validation("userType is required".to_string())),
            other => Err(AppError::Validation(format!(
                "userType must be 'jobseeker' or 'recruiter', got '{other}'"
            ))),
        }
    }
}

/// Job seeker profile fields. Empty strings mean "not filled in yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobseekerProfile {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub experience_level: String,
    pub education: String,
    pub skills: Vec<String>,
    pub summary: Option<String>,
}

/// Body of `PUT /jobseeker/profile`. Skills are managed separately.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub experience_level: String,
    pub education: String,
    pub summary: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    /// Applies the update, keeping the existing skills.
    pub fn apply_to(self, profile: &mut JobseekerProfile) {
        profile.name = self.name.trim().to_string();
        profile.phone = self.phone.trim().to_string();
        profile.location = self.location.trim().to_string();
        profile.experience_level = self.experience_level.trim().to_string();
        profile.education = self.education.trim().to_string();
        profile.summary = self
            .summary
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }
}

/// A registered account. Never serialized directly: the password digest
/// must not leave the process, so responses go through [`Account::public_view`].
#[derive(Debug, Clone)]
pub struct Account {
    pub id: u32,
    pub email: String,
    pub user_type: UserType,
    pub name: Option<String>,
    pub password: PasswordDigest,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub profile: JobseekerProfile,
    pub created_at: DateTime<Utc>,
}

/// Account data safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u32,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            user_type: self.user_type,
            name: self.name.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            created_at: self.created_at,
        }
    }
}

/// Trims, drops empty entries and removes case-insensitive duplicates,
/// keeping the first spelling seen.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserType::Jobseeker).unwrap(),
            "\"jobseeker\""
        );
        let parsed: UserType = serde_json::from_str("\"recruiter\"").unwrap();
        assert_eq!(parsed, UserType::Recruiter);
    }

    #[test]
    fn test_user_type_from_str_is_lenient_about_case() {
        assert_eq!("Recruiter".parse::<UserType>().unwrap(), UserType::Recruiter);
        assert!(matches!("".parse::<UserType>(), Err(AppError::Validation(_))));
        assert!(matches!("admin".parse::<UserType>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_normalize_skills_dedupes_case_insensitively() {
        let skills = vec![
            " Rust ".to_string(),
            "rust".to_string(),
            "".to_string(),
            "SQL".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(normalize_skills(skills), vec!["Rust", "SQL"]);
    }
}
