//! In-memory portal store: accounts, job postings and applications.
//!
//! Nothing here outlives the process. All access goes through a single
//! `tokio::sync::RwLock`; no method holds the lock across another await.

pub mod applications;
pub mod jobs;

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::password::PasswordDigest;
use crate::errors::AppError;
use crate::matching::fixtures::{bundled_candidates, MAX_FIXTURE_ID};
use crate::models::application::Application;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::user::{
    normalize_skills, Account, JobseekerProfile, ProfileUpdate, UserType,
};

/// First id handed to a registered account.
pub const FIRST_ACCOUNT_ID: u32 = 101;

// Candidate search mixes fixture ids and account ids in one snapshot.
const _: () = assert!(FIRST_ACCOUNT_ID > MAX_FIXTURE_ID);

/// Registration data after request validation.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub user_type: UserType,
    pub name: Option<String>,
    pub password: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

struct StoreInner {
    accounts: HashMap<(UserType, String), Account>,
    jobs: BTreeMap<u32, Job>,
    applications: Vec<Application>,
    next_account_id: u32,
    next_job_id: u32,
    next_application_id: u32,
}

pub struct PortalStore {
    inner: RwLock<StoreInner>,
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Emails are compared trimmed and case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl PortalStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                accounts: HashMap::new(),
                jobs: BTreeMap::new(),
                applications: Vec::new(),
                next_account_id: FIRST_ACCOUNT_ID,
                next_job_id: 1,
                next_application_id: 1,
            }),
        }
    }

    /// Registers an account. One account per (role, email).
    pub async fn create_account(&self, new: NewAccount) -> Result<Account, AppError> {
        let email = normalize_email(&new.email);
        let key = (new.user_type, email.clone());

        let mut inner = self.inner.write().await;
        if inner.accounts.contains_key(&key) {
            return Err(AppError::Duplicate("User already exists".to_string()));
        }

        let id = inner.next_account_id;
        inner.next_account_id += 1;

        let name = new.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        let (phone, company) = match new.user_type {
            UserType::Jobseeker => (new.phone, None),
            UserType::Recruiter => (None, new.company),
        };
        let profile = JobseekerProfile {
            name: name.clone().unwrap_or_default(),
            phone: phone.clone().unwrap_or_default(),
            ..JobseekerProfile::default()
        };

        let account = Account {
            id,
            email,
            user_type: new.user_type,
            name,
            password: PasswordDigest::new(&new.password),
            phone,
            company,
            profile,
            created_at: Utc::now(),
        };

        inner.accounts.insert(key, account.clone());
        info!("Registered {} {} (id {})", account.user_type, account.email, id);
        Ok(account)
    }

    pub async fn find_account(&self, user_type: UserType, email: &str) -> Option<Account> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .get(&(user_type, normalize_email(email)))
            .cloned()
    }

    /// Checks credentials. Unknown account and wrong password are distinct 401s.
    pub async fn authenticate(
        &self,
        user_type: UserType,
        email: &str,
        password: &str,
    ) -> Result<Account, AppError> {
        let account = self
            .find_account(user_type, email)
            .await
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        if !account.password.verify(password) {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }
        Ok(account)
    }

    pub async fn update_profile(
        &self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<JobseekerProfile, AppError> {
        let mut inner = self.inner.write().await;
        let account = jobseeker_mut(&mut inner, email)?;

        update.apply_to(&mut account.profile);
        account.name = Some(account.profile.name.clone());
        account.phone = Some(account.profile.phone.clone()).filter(|p| !p.is_empty());
        Ok(account.profile.clone())
    }

    /// Replaces a job seeker's skills. Returns the normalized list.
    pub async fn update_skills(
        &self,
        email: &str,
        skills: Vec<String>,
    ) -> Result<Vec<String>, AppError> {
        let mut inner = self.inner.write().await;
        let account = jobseeker_mut(&mut inner, email)?;

        account.profile.skills = normalize_skills(skills);
        Ok(account.profile.skills.clone())
    }

    /// Candidate records for every registered job seeker, ordered by id.
    pub async fn registered_candidates(&self) -> Vec<Candidate> {
        let inner = self.inner.read().await;
        let mut candidates: Vec<Candidate> = inner
            .accounts
            .values()
            .filter_map(Candidate::from_account)
            .collect();
        candidates.sort_by_key(|c| c.id);
        candidates
    }

    /// The collection candidate search runs over: the bundled records
    /// followed by registered job seekers.
    pub async fn candidate_snapshot(&self) -> Vec<Candidate> {
        let mut snapshot = bundled_candidates().to_vec();
        snapshot.extend(self.registered_candidates().await);
        snapshot
    }

    pub async fn find_candidate(&self, id: u32) -> Option<Candidate> {
        if id <= MAX_FIXTURE_ID {
            return bundled_candidates().iter().find(|c| c.id == id).cloned();
        }
        self.registered_candidates()
            .await
            .into_iter()
            .find(|c| c.id == id)
    }
}

fn jobseeker_mut<'a>(inner: &'a mut StoreInner, email: &str) -> Result<&'a mut Account, AppError> {
    inner
        .accounts
        .get_mut(&(UserType::Jobseeker, normalize_email(email)))
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
