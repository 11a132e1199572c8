//! Bundled reference data: the candidate collection recruiters search
//! before anyone registers, and the sample postings seeded at start-up.

use std::sync::OnceLock;

use crate::models::candidate::Candidate;
use crate::models::job::JobInput;

/// Highest id used by the bundled candidates. Account ids start above it.
pub const MAX_FIXTURE_ID: u32 = 6;

fn candidate(
    id: u32,
    name: &str,
    email: &str,
    location: &str,
    education: &str,
    experience: &str,
    skills: &[&str],
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        location: location.to_string(),
        education: education.to_string(),
        experience: experience.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The immutable six-record candidate collection.
pub fn bundled_candidates() -> &'static [Candidate] {
    static CANDIDATES: OnceLock<Vec<Candidate>> = OnceLock::new();
    CANDIDATES.get_or_init(|| {
        vec![
            candidate(
                1,
                "Rahul Kumar",
                "rahul.kumar@example.com",
                "Bangalore",
                "B.Tech Computer Science, IIT Delhi",
                "4 years",
                &["Python", "Machine Learning", "TensorFlow", "Data Analysis"],
            ),
            candidate(
                2,
                "Priya Sharma",
                "priya.sharma@example.com",
                "Mumbai",
                "B.E. Information Technology, Mumbai University",
                "3 years",
                &["React", "JavaScript", "TypeScript", "CSS"],
            ),
            candidate(
                3,
                "Amit Patel",
                "amit.patel@example.com",
                "Pune",
                "B.Tech Computer Engineering, Pune University",
                "6 years",
                &["Java", "Spring Boot", "Microservices", "AWS"],
            ),
            candidate(
                4,
                "Sneha Reddy",
                "sneha.reddy@example.com",
                "Hyderabad",
                "M.Tech Software Engineering, NIT Warangal",
                "5 years",
                &["Python", "Django", "PostgreSQL", "REST APIs"],
            ),
            candidate(
                5,
                "Ananya Iyer",
                "ananya.iyer@example.com",
                "Chennai",
                "B.Des Interaction Design, NID Ahmedabad",
                "2 years",
                &["UI/UX Design", "Figma", "Adobe XD", "User Research"],
            ),
            candidate(
                6,
                "Vikram Singh",
                "vikram.singh@example.com",
                "Delhi",
                "B.Sc Computer Science, Delhi University",
                "7 years",
                &["DevOps", "Docker", "Kubernetes", "CI/CD"],
            ),
        ]
    })
}

fn job(
    title: &str,
    location: &str,
    employment_type: &str,
    description: &str,
    skills: &[&str],
    salary: (u64, u64),
) -> JobInput {
    JobInput {
        title: title.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        min_salary: salary.0,
        max_salary: salary.1,
    }
}

/// Sample postings seeded when `SEED_SAMPLE_JOBS` is on.
pub fn sample_jobs() -> Vec<JobInput> {
    vec![
        job(
            "Frontend Developer",
            "Bangalore",
            "Full-time",
            "Build and maintain the candidate-facing web app.",
            &["React", "TypeScript", "CSS"],
            (800_000, 1_400_000),
        ),
        job(
            "Machine Learning Engineer",
            "Remote",
            "Full-time",
            "Train and ship ranking models for job recommendations.",
            &["Python", "TensorFlow", "SQL"],
            (1_500_000, 2_500_000),
        ),
        job(
            "Backend Engineer",
            "Hyderabad",
            "Contract",
            "Own the applications and billing services.",
            &["Java", "Spring Boot", "PostgreSQL"],
            (1_200_000, 1_800_000),
        ),
        job(
            "DevOps Engineer",
            "Pune",
            "Full-time",
            "Run the Kubernetes platform and CI pipelines.",
            &["Docker", "Kubernetes", "AWS"],
            (1_300_000, 2_000_000),
        ),
    ]
}
