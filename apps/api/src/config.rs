use anyhow::{Context, Result};

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Lifetime of an issued session token.
    pub session_ttl_minutes: i64,
    /// Seed a handful of sample job postings at start-up.
    pub seed_sample_jobs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rust_log: "info".to_string(),
            session_ttl_minutes: 60 * 24,
            seed_sample_jobs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            session_ttl_minutes: optional_env("SESSION_TTL_MINUTES")
                .map(|v| parse_ttl_minutes(&v))
                .transpose()
                .with_context(|| {
                    format!(
                        "SESSION_TTL_MINUTES must be a whole number of minutes between 1 and {MAX_SESSION_TTL_MINUTES}"
                    )
                })?
                .unwrap_or(defaults.session_ttl_minutes),
            seed_sample_jobs: optional_env("SEED_SAMPLE_JOBS")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("SEED_SAMPLE_JOBS must be true/false")?
                .unwrap_or(defaults.seed_sample_jobs),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_ttl_minutes(value: &str) -> Result<i64> {
    let minutes: i64 = value.trim().parse()?;
    if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
        anyhow::bail!("{minutes} is out of range");
    }
    Ok(minutes)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
