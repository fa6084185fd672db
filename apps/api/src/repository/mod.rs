//! Read-side collaborators for the matching core.
//!
//! Handlers depend on these traits, never on sqlx directly, so the
//! Postgres store can be replaced (or faked in tests) without touching them.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Job, LearningResource, UserProfile};

pub mod postgres;

#[cfg(test)]
pub(crate) mod memory;

pub use postgres::PgRepository;

/// A failed read. Distinct from an empty result, which is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Data unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Active jobs, newest first. `None` means no cap.
    async fn active_jobs(&self, limit: Option<i64>) -> Result<Vec<Job>, RepositoryError>;

    async fn job_by_id(&self, id: Uuid) -> Result<Job, RepositoryError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn profile(&self, user_id: Uuid) -> Result<UserProfile, RepositoryError>;
}

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Resources tagged with any of `skills` (lowercase exact match), best rated first.
    async fn resources_for_skills(
        &self,
        skills: &[String],
        limit: i64,
    ) -> Result<Vec<LearningResource>, RepositoryError>;
}
