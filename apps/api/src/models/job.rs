use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::matching::levels::{ExperienceLevel, JobType};

/// A job posting as seen by the matching core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub application_url: Option<String>,
    pub is_active: bool,
    pub posted_by_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw `jobs` row. Enum columns are stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
    pub job_type: String,
    pub experience_level: String,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub salary: Option<String>,
    pub application_url: Option<String>,
    pub is_active: bool,
    pub posted_by_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let job_type = JobType::parse(&row.job_type).unwrap_or_else(|| {
            warn!(job_id = %row.id, job_type = %row.job_type, "Unknown job type, defaulting to Full-time");
            JobType::default()
        });
        let experience_level = ExperienceLevel::parse(&row.experience_level).unwrap_or_else(|| {
            warn!(
                job_id = %row.id,
                experience_level = %row.experience_level,
                "Unknown experience level, defaulting to Fresher"
            );
            ExperienceLevel::default()
        });

        Job {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            is_remote: row.is_remote,
            job_type,
            experience_level,
            description: row.description.unwrap_or_default(),
            requirements: row.requirements.unwrap_or_default(),
            skills: row.skills.unwrap_or_default(),
            salary: row.salary,
            application_url: row.application_url,
            is_active: row.is_active,
            posted_by_id: row.posted_by_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(job_type: &str, level: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Dhaka".to_string(),
            is_remote: false,
            job_type: job_type.to_string(),
            experience_level: level.to_string(),
            description: None,
            requirements: None,
            skills: None,
            salary: None,
            application_url: None,
            is_active: true,
            posted_by_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_null_collections_become_empty() {
        let job = Job::from(make_row("Full-time", "Mid"));
        assert!(job.skills.is_empty());
        assert!(job.requirements.is_empty());
        assert_eq!(job.description, "");
    }

    #[test]
    fn test_enum_columns_parsed() {
        let job = Job::from(make_row("Internship", "Junior"));
        assert_eq!(job.job_type, JobType::Internship);
        assert_eq!(job.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_defaults() {
        let job = Job::from(make_row("gig", "guru"));
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.experience_level, ExperienceLevel::Fresher);
    }

    #[test]
    fn test_serializes_camel_case() {
        let job = Job::from(make_row("Part-time", "Senior"));
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobType"], "Part-time");
        assert_eq!(value["experienceLevel"], "Senior");
        assert!(value.get("isRemote").is_some());
    }
}
