use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::matching::levels::{ExperienceLevel, JobType};
use crate::models::{Job, ProfileSkill, UserProfile};

/// Fixed so that recency ordering leaves fixture order untouched.
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

pub fn make_job(title: &str, skills: &[&str], level: ExperienceLevel) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme Ltd".to_string(),
        location: "Dhaka, Bangladesh".to_string(),
        is_remote: false,
        job_type: JobType::FullTime,
        experience_level: level,
        description: String::new(),
        requirements: vec![],
        skills: skills.iter().map(|s| s.to_string()).collect(),
        salary: None,
        application_url: None,
        is_active: true,
        posted_by_id: Uuid::new_v4(),
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

pub fn make_profile(skills: &[&str], level: Option<ExperienceLevel>) -> UserProfile {
    UserProfile {
        user_id: Uuid::new_v4(),
        skills: skills
            .iter()
            .map(|s| ProfileSkill {
                skill_name: s.to_string(),
                level: None,
            })
            .collect(),
        experience_level: level,
        preferred_career_track: None,
        education_level: None,
        cv_text: None,
    }
}
