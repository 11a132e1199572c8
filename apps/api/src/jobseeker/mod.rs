//! Job seeker endpoints: dashboard, profile and skills, applications, resume.

pub mod handlers;
