use serde::{Deserialize, Serialize};

use crate::matching::levels::ExperienceLevel;
use crate::models::UserProfile;

const MIN_SKILL_COUNT: usize = 5;
const MIN_CV_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
    pub priority: SuggestionPriority,
}

/// Profile-completeness advice. Each rule fires independently, in a fixed order.
pub fn career_suggestions(profile: &UserProfile) -> Vec<CareerSuggestion> {
    let mut suggestions = Vec::new();

    if matches!(
        profile.effective_experience_level(),
        ExperienceLevel::Fresher | ExperienceLevel::Junior
    ) {
        suggestions.push(CareerSuggestion {
            title: "Build Your Portfolio".to_string(),
            description: "Work on personal or open-source projects to showcase your skills to employers."
                .to_string(),
            priority: SuggestionPriority::High,
        });
    }

    if profile.skills.len() < MIN_SKILL_COUNT {
        suggestions.push(CareerSuggestion {
            title: "Expand Your Skillset".to_string(),
            description: format!(
                "You have {} skills listed. Add at least {MIN_SKILL_COUNT} to match more jobs.",
                profile.skills.len()
            ),
            priority: SuggestionPriority::High,
        });
    }

    let cv_chars = profile
        .cv_text
        .as_deref()
        .map(|t| t.trim().chars().count())
        .unwrap_or(0);
    if cv_chars < MIN_CV_CHARS {
        suggestions.push(CareerSuggestion {
            title: "Complete Your Profile".to_string(),
            description: "Add a detailed CV so employers and recommendations can see your full experience."
                .to_string(),
            priority: SuggestionPriority::Medium,
        });
    }

    suggestions
}
