use serde::{Deserialize, Serialize};

use crate::models::user::{Account, UserType};

/// A candidate profile as seen by recruiter search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub location: String,
    pub education: String,
    pub experience: String,
    pub skills: Vec<String>,
}

/// A candidate paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// 0 – 100
    #[serde(rename = "match")]
    pub match_score: u32,
}

impl Candidate {
    /// Derives a searchable candidate from a job seeker account.
    /// Recruiter accounts are never candidates.
    pub fn from_account(account: &Account) -> Option<Candidate> {
        if account.user_type != UserType::Jobseeker {
            return None;
        }

        let profile = &account.profile;
        let name = if profile.name.trim().is_empty() {
            account.name.clone().unwrap_or_default()
        } else {
            profile.name.clone()
        };

        Some(Candidate {
            id: account.id,
            name,
            email: account.email.clone(),
            location: profile.location.clone(),
            education: profile.education.clone(),
            experience: profile.experience_level.clone(),
            skills: profile.skills.clone(),
        })
    }

    /// Short one-line description used by shortlist rendering.
    pub fn headline(&self) -> String {
        let top_skills: Vec<&str> = self.skills.iter().take(3).map(String::as_str).collect();
        match (self.experience.is_empty(), top_skills.is_empty()) {
            (false, false) => format!("{} · {}", self.experience, top_skills.join(", ")),
            (false, true) => self.experience.clone(),
            (true, false) => top_skills.join(", "),
            (true, true) => self.location.clone(),
        }
    }
}
