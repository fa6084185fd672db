use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::levels::ExperienceLevel;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSkill {
    pub skill_name: String,
    pub level: Option<String>,
}

/// The slice of a job seeker's profile the matching core reads.
/// Absent fields are treated as empty, never as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub skills: Vec<ProfileSkill>,
    pub experience_level: Option<ExperienceLevel>,
    pub preferred_career_track: Option<String>,
    pub education_level: Option<String>,
    pub cv_text: Option<String>,
}

impl UserProfile {
    /// Lowercased skill names with blanks dropped.
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills
            .iter()
            .map(|s| s.skill_name.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.skill_name.clone()).collect()
    }

    /// Level used for scoring; unknown or missing counts as Fresher.
    pub fn effective_experience_level(&self) -> ExperienceLevel {
        self.experience_level.unwrap_or_default()
    }

    pub fn from_rows(row: ProfileRow, skills: Vec<ProfileSkillRow>) -> Self {
        UserProfile {
            user_id: row.user_id,
            skills: skills
                .into_iter()
                .map(|s| ProfileSkill {
                    skill_name: s.skill_name,
                    level: s.level,
                })
                .collect(),
            experience_level: row
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::parse),
            preferred_career_track: row.preferred_career_track,
            education_level: row.education_level,
            cv_text: row.cv_text,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub experience_level: Option<String>,
    pub preferred_career_track: Option<String>,
    pub education_level: Option<String>,
    pub cv_text: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileSkillRow {
    pub skill_name: String,
    pub level: Option<String>,
}
