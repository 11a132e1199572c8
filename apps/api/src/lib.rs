//! Job portal: an axum API for job seekers and recruiters with keyword
//! candidate/job search, plus a typed client for it.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod jobseeker;
pub mod matching;
pub mod models;
pub mod recruiter;
pub mod resume;
pub mod routes;
pub mod search;
pub mod shortlist;
pub mod state;
pub mod store;
