//! Keyword matching for recruiter candidate search and job seeker job search.
//!
//! `AppState` holds an `Arc<dyn Matcher>`; `KeywordMatcher` is the only
//! backend. Scoring is synchronous and pure: no I/O, no shared state.

pub mod candidates;
pub mod fixtures;
pub mod jobs;
pub mod query;
pub mod scoring;

use crate::models::candidate::{Candidate, ScoredCandidate};
use crate::models::job::{Job, ScoredJob};

/// Ranks records against a free-text query. Implement this to swap the
/// scoring backend without touching handlers.
pub trait Matcher: Send + Sync {
    /// Candidates with a positive score, best first.
    fn match_candidates(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate>;

    /// Jobs with a positive score, best first.
    fn match_jobs(&self, query: &str, jobs: &[Job]) -> Vec<ScoredJob>;

    /// Backend label, reported in search responses.
    fn backend(&self) -> &'static str;
}

/// Substring keyword scorer. See [`scoring`] for the point rules.
pub struct KeywordMatcher;

impl Matcher for KeywordMatcher {
    fn match_candidates(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        candidates::match_candidates(query, candidates)
    }

    fn match_jobs(&self, query: &str, jobs: &[Job]) -> Vec<ScoredJob> {
        jobs::match_jobs(query, jobs)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
