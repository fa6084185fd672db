// AI-assisted features: career chat, CV skill extraction, learning roadmaps.
// All LLM calls go through llm_client; nothing here talks to Gemini directly.

pub mod chat;
pub mod cv;
pub mod handlers;
pub mod prompts;
pub mod roadmap;

use crate::models::UserProfile;

/// Compact, prompt-ready description of a profile. Never includes the CV body.
pub fn profile_context(profile: &UserProfile) -> String {
    let skills = profile.skill_names();
    format!(
        "Experience level: {}\nSkills: {}\nPreferred career track: {}\nEducation: {}",
        profile.effective_experience_level(),
        if skills.is_empty() {
            "none listed".to_string()
        } else {
            skills.join(", ")
        },
        profile
            .preferred_career_track
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("not set"),
        profile
            .education_level
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("not set"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::levels::ExperienceLevel;
    use crate::matching::test_support::make_profile;

    #[test]
    fn test_profile_context_lists_fields() {
        let mut profile = make_profile(&["Rust", "SQL"], Some(ExperienceLevel::Junior));
        profile.preferred_career_track = Some("Backend Engineering".to_string());
        let context = profile_context(&profile);
        assert!(context.contains("Experience level: Junior"));
        assert!(context.contains("Skills: Rust, SQL"));
        assert!(context.contains("Backend Engineering"));
        assert!(context.contains("Education: not set"));
    }

    #[test]
    fn test_profile_context_empty_skills() {
        let profile = make_profile(&[], None);
        assert!(profile_context(&profile).contains("Skills: none listed"));
    }
}
