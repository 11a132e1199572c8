use crate::errors::AppError;
use crate::models::user::Account;

const RULE: &str = "----------------------------------------";

/// Renders the resume. Sections with no content are left out; the name is
/// the only required field.
pub fn generate_resume_text(account: &Account) -> Result<String, AppError> {
    let profile = &account.profile;
    let name = profile.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Add your name to your profile before generating a resume".to_string(),
        ));
    }

    let mut out = String::new();
    out.push_str(&name.to_uppercase());
    out.push('\n');

    let contact: Vec<&str> = [account.email.as_str(), profile.phone.trim(), profile.location.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    out.push_str(&contact.join(" | "));
    out.push('\n');

    if let Some(summary) = profile.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        push_section(&mut out, "SUMMARY", summary);
    }
    if !profile.skills.is_empty() {
        push_section(&mut out, "SKILLS", &profile.skills.join(", "));
    }
    if !profile.experience_level.trim().is_empty() {
        push_section(&mut out, "EXPERIENCE", profile.experience_level.trim());
    }
    if !profile.education.trim().is_empty() {
        push_section(&mut out, "EDUCATION", profile.education.trim());
    }

    Ok(out)
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::PasswordDigest;
    use crate::models::user::{JobseekerProfile, UserType};
    use chrono::Utc;

    fn account(profile: JobseekerProfile) -> Account {
        Account {
            id: 101,
            email: "meera@example.com".to_string(),
            user_type: UserType::Jobseeker,
            name: Some(profile.name.clone()),
            password: PasswordDigest::new("password123"),
            phone: None,
            company: None,
            profile,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_profile_renders_all_sections_in_order() {
        let text = generate_resume_text(&account(JobseekerProfile {
            name: "Meera Nair".to_string(),
            phone: "98450 00000".to_string(),
            location: "Kochi".to_string(),
            experience_level: "3 years".to_string(),
            education: "B.Tech, CUSAT".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            summary: Some("Backend engineer.".to_string()),
        }))
        .unwrap();

        assert!(text.starts_with("MEERA NAIR\nmeera@example.com | 98450 00000 | Kochi\n"));
        let order: Vec<usize> = ["SUMMARY", "SKILLS", "EXPERIENCE", "EDUCATION"]
            .iter()
            .map(|h| text.find(h).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Rust, SQL"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let text = generate_resume_text(&account(JobseekerProfile {
            name: "Meera Nair".to_string(),
            skills: vec!["Go".to_string()],
            ..JobseekerProfile::default()
        }))
        .unwrap();

        assert!(text.contains("SKILLS"));
        assert!(!text.contains("SUMMARY"));
        assert!(!text.contains("EDUCATION"));
        assert!(text.contains("meera@example.com\n"));
    }

    #[test]
    fn test_name_is_required() {
        let result = generate_resume_text(&account(JobseekerProfile::default()));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
