use crate::matching::scoring::{rank, Searchable};
use crate::models::candidate::{Candidate, ScoredCandidate};

/// Ranks candidates for a recruiter query.
///
/// Skills earn 30 points per hit; name, education and location earn 10
/// each. Email and experience are displayed but never scored.
pub fn match_candidates(query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
    rank(
        query,
        candidates,
        |c| Searchable {
            skills: &c.skills,
            fields: vec![c.name.as_str(), c.education.as_str(), c.location.as_str()],
        },
        |c, match_score| ScoredCandidate {
            candidate: c.clone(),
            match_score,
        },
        |scored| scored.match_score,
    )
}
