// Resume ingestion: PDF text, skill and contact extraction, session profiles.

pub mod contact;
pub mod handlers;
pub mod pdf;
pub mod session;
pub mod skills;
pub mod taxonomy;

use chrono::Utc;

use crate::resume::contact::extract_contact_info;
use crate::resume::session::ResumeProfile;
use crate::resume::skills::extract_skills;

/// Derives a profile from extracted resume text. Empty text still yields the default skill.
pub fn build_profile(text: String, filename: String) -> ResumeProfile {
    ResumeProfile {
        skills: extract_skills(&text),
        contact_info: extract_contact_info(&text),
        text,
        filename,
        uploaded_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_profile_from_text() {
        let profile = build_profile(
            "Asha Rao\nasha@example.com\nDocker and Kubernetes".to_string(),
            "asha.pdf".to_string(),
        );
        assert_eq!(profile.contact_info.name, "Asha Rao");
        assert!(profile.skills.contains(&"Docker".to_string()));
        assert!(profile.skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_build_profile_from_empty_text() {
        let profile = build_profile(String::new(), "scan.pdf".to_string());
        assert_eq!(profile.skills, vec!["Software Engineer".to_string()]);
        assert_eq!(profile.contact_info.name, "Candidate");
    }
}
