use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Job, JobRow, LearningResource, LearningResourceRow, ProfileRow, ProfileSkillRow, UserProfile,
};
use crate::repository::{JobRepository, ProfileRepository, RepositoryError, ResourceRepository};

/// All three read collaborators over one Postgres pool.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

const MAX_CONNECTIONS: u32 = 10;

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool eagerly so a bad `DATABASE_URL` fails at startup.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl JobRepository for PgRepository {
    async fn active_jobs(&self, limit: Option<i64>) -> Result<Vec<Job>, RepositoryError> {
        // LIMIT NULL is "no limit" in Postgres
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE is_active = TRUE ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn job_by_id(&self, id: Uuid) -> Result<Job, RepositoryError> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Job::from)
            .ok_or(RepositoryError::NotFound { entity: "Job", id })
    }
}

#[async_trait]
impl ProfileRepository for PgRepository {
    async fn profile(&self, user_id: Uuid) -> Result<UserProfile, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, experience_level, preferred_career_track, education_level, cv_text
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound {
            entity: "Profile",
            id: user_id,
        })?;

        let skills = sqlx::query_as::<_, ProfileSkillRow>(
            "SELECT skill_name, level FROM profile_skills WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(UserProfile::from_rows(row, skills))
    }
}

#[async_trait]
impl ResourceRepository for PgRepository {
    async fn resources_for_skills(
        &self,
        skills: &[String],
        limit: i64,
    ) -> Result<Vec<LearningResource>, RepositoryError> {
        if skills.is_empty() {
            return Ok(vec![]);
        }
        let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        let rows = sqlx::query_as::<_, LearningResourceRow>(
            r#"
            SELECT id, title, platform, url, skills, cost_type, level, rating
            FROM learning_resources
            WHERE EXISTS (
                SELECT 1 FROM unnest(skills) AS s WHERE lower(s) = ANY($1)
            )
            ORDER BY rating DESC NULLS LAST
            LIMIT $2
            "#,
        )
        .bind(lowered)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LearningResource::from).collect())
    }
}
