use crate::matching::scoring::{rank, Searchable};
use crate::models::job::{Job, ScoredJob};

/// Ranks job postings for a job seeker query.
///
/// Same point rules as candidate search: required skills earn 30 per hit;
/// title, location and employment type earn 10 each.
pub fn match_jobs(query: &str, jobs: &[Job]) -> Vec<ScoredJob> {
    rank(
        query,
        jobs,
        |j| Searchable {
            skills: &j.skills,
            fields: vec![
                j.title.as_str(),
                j.location.as_str(),
                j.employment_type.as_str(),
            ],
        },
        |j, match_score| ScoredJob {
            job: j.clone(),
            match_score,
        },
        |scored| scored.match_score,
    )
}
