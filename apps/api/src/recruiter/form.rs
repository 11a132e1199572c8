use std::collections::HashMap;

use axum::extract::Multipart;

use crate::errors::AppError;
use crate::models::job::{parse_skills_field, JobInput};

/// Reads every text field of a multipart job form into a name → value map.
/// Later duplicates overwrite earlier ones.
pub async fn read_fields(mut multipart: Multipart) -> Result<HashMap<String, String>, AppError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Unreadable form field '{name}': {e}")))?;
        fields.insert(name, value);
    }
    Ok(fields)
}

/// Builds a validated [`JobInput`] from posted form fields.
pub fn job_input_from_fields(fields: &HashMap<String, String>) -> Result<JobInput, AppError> {
    let text = |name: &str| fields.get(name).cloned().unwrap_or_default();

    JobInput {
        title: text("title"),
        location: text("location"),
        employment_type: text("employmentType"),
        description: text("description"),
        skills: parse_skills_field(&text("skills"))?,
        min_salary: salary(fields, "minSalary")?,
        max_salary: salary(fields, "maxSalary")?,
    }
    .validated()
}

fn salary(fields: &HashMap<String, String>, name: &str) -> Result<u64, AppError> {
    let raw = fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    raw.parse::<u64>()
        .map_err(|_| AppError::Validation(format!("{name} must be a whole number, got '{raw}'")))
}
