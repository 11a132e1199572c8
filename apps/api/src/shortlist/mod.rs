//! Recruiter shortlist: an insertion-ordered set of candidates keyed by id.
//!
//! One shortlist lives inside each recruiter session and is dropped with it
//! on logout or expiry.

pub mod handlers;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

/// Result of [`Shortlist::add`]. A duplicate is a notice for the user, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

impl AddOutcome {
    pub fn message(&self, name: &str) -> String {
        match self {
            AddOutcome::Added => format!("{name} added to shortlist"),
            AddOutcome::AlreadyPresent => format!("{name} is already in your shortlist"),
        }
    }
}

/// A display-ready shortlist row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistRow {
    pub position: usize,
    pub id: u32,
    pub name: String,
    pub email: String,
    pub headline: String,
}

#[derive(Debug, Clone, Default)]
pub struct Shortlist {
    entries: IndexMap<u32, Candidate>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the candidate unless its id is already present.
    pub fn add(&mut self, candidate: Candidate) -> AddOutcome {
        if self.entries.contains_key(&candidate.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.insert(candidate.id, candidate);
        AddOutcome::Added
    }

    /// Removes the candidate with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        // shift_remove keeps the remaining entries in insertion order
        self.entries.shift_remove(&id).is_some()
    }

    /// Empties the shortlist only when the user confirmed. Returns whether it was cleared.
    pub fn clear(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.entries.clear();
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> Vec<ShortlistRow> {
        self.entries
            .values()
            .enumerate()
            .map(|(i, c)| ShortlistRow {
                position: i + 1,
                id: c.id,
                name: c.name.clone(),
                email: c.email.clone(),
                headline: c.headline(),
            })
            .collect()
    }
}
