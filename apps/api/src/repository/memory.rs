use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Job, LearningResource, UserProfile};
use crate::repository::{JobRepository, ProfileRepository, RepositoryError, ResourceRepository};

/// In-memory collaborators for handler tests. `failing` simulates a store outage.
#[derive(Default)]
pub struct MemoryRepository {
    pub jobs: Vec<Job>,
    pub profiles: Vec<UserProfile>,
    pub resources: Vec<LearningResource>,
    pub failing: bool,
}

impl MemoryRepository {
    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing {
            Err(RepositoryError::Unavailable(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl JobRepository for MemoryRepository {
    async fn active_jobs(&self, limit: Option<i64>) -> Result<Vec<Job>, RepositoryError> {
        self.check()?;
        let mut jobs: Vec<Job> = self.jobs.iter().filter(|j| j.is_active).cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            jobs.truncate(limit.max(0) as usize);
        }
        Ok(jobs)
    }

    async fn job_by_id(&self, id: Uuid) -> Result<Job, RepositoryError> {
        self.check()?;
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { entity: "Job", id })
    }
}

#[async_trait]
impl ProfileRepository for MemoryRepository {
    async fn profile(&self, user_id: Uuid) -> Result<UserProfile, RepositoryError> {
        self.check()?;
        self.profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound {
                entity: "Profile",
                id: user_id,
            })
    }
}

#[async_trait]
impl ResourceRepository for MemoryRepository {
    async fn resources_for_skills(
        &self,
        skills: &[String],
        limit: i64,
    ) -> Result<Vec<LearningResource>, RepositoryError> {
        self.check()?;
        let wanted: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        Ok(self
            .resources
            .iter()
            .filter(|r| r.skills.iter().any(|s| wanted.contains(&s.to_lowercase())))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::levels::ExperienceLevel;
    use crate::matching::test_support::make_job;

    #[tokio::test]
    async fn test_failing_store_reports_unavailable() {
        let repo = MemoryRepository {
            failing: true,
            ..Default::default()
        };
        let err = repo.active_jobs(Some(50)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_store_is_not_an_error() {
        let repo = MemoryRepository::default();
        assert!(repo.active_jobs(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_job_is_not_found() {
        let repo = MemoryRepository {
            jobs: vec![make_job("Dev", &["Rust"], ExperienceLevel::Mid)],
            ..Default::default()
        };
        let err = repo.job_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Job", .. }));
    }
}
