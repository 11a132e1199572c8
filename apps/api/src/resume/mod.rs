//! Plain-text resume assembled from a job seeker's account and profile.

pub mod generator;

pub use generator::generate_resume_text;
