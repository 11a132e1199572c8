//! Recruiter endpoints: dashboard, job postings and the applications they
//! receive. Shortlist routes live in [`crate::shortlist::handlers`].

pub mod form;
pub mod handlers;
