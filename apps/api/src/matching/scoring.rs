//! Point rules shared by candidate and job matching.
//!
//! For every query token:
//! - +30 for each skill containing the token (so one token can hit several skills)
//! - +10 for each plain-text field containing the token
//!
//! The sum is clamped to 100. Comparison is case-insensitive substring.

use std::cmp::Reverse;

use crate::matching::query::tokenize;

pub const SKILL_POINTS: u32 = 30;
pub const FIELD_POINTS: u32 = 10;
pub const MAX_SCORE: u32 = 100;

/// The text a record exposes to the scorer.
pub struct Searchable<'a> {
    pub skills: &'a [String],
    pub fields: Vec<&'a str>,
}

/// Scores one record against already-tokenized, lower-case query tokens.
pub fn score_tokens(tokens: &[String], record: &Searchable<'_>) -> u32 {
    let skills: Vec<String> = record.skills.iter().map(|s| s.to_lowercase()).collect();
    let fields: Vec<String> = record.fields.iter().map(|f| f.to_lowercase()).collect();

    let mut score = 0_u32;
    for token in tokens {
        let skill_hits = skills.iter().filter(|s| s.contains(token.as_str())).count() as u32;
        let field_hits = fields.iter().filter(|f| f.contains(token.as_str())).count() as u32;

        score = score
            .saturating_add(skill_hits.saturating_mul(SKILL_POINTS))
            .saturating_add(field_hits.saturating_mul(FIELD_POINTS));
    }

    score.min(MAX_SCORE)
}

/// Scores every item, drops zero scores and sorts best first.
///
/// The sort is stable, so equal scores keep their input order. Callers
/// should treat tie order as unspecified.
pub fn rank<T, R>(
    query: &str,
    items: &[T],
    searchable: impl Fn(&T) -> Searchable<'_>,
    wrap: impl Fn(&T, u32) -> R,
    score_of: impl Fn(&R) -> u32,
) -> Vec<R> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return vec![];
    }

    let mut ranked: Vec<R> = items
        .iter()
        .filter_map(|item| {
            let score = score_tokens(&tokens, &searchable(item));
            (score > 0).then(|| wrap(item, score))
        })
        .collect();

    ranked.sort_by_key(|r| Reverse(score_of(r)));
    ranked
}
