//! Axum route handlers for job matching and the seeker dashboard.
//!
//! Handlers fetch from the repositories and hand plain data to the pure core.
//! A failed fetch is returned as an error; it is never replaced by empty data.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::platform_links::{build_platform_links, PlatformLinks};
use crate::matching::quick_wins::{select_quick_wins, QuickWin};
use crate::matching::recommender::{recommend_jobs, RecommendedJob};
use crate::matching::scorer::MatchResult;
use crate::matching::skill_gaps::{
    aggregate_skill_gaps, attach_learning_resources, resource_query_skills, SkillGapReport,
    RESOURCE_QUERY_LIMIT,
};
use crate::matching::suggestions::{career_suggestions, CareerSuggestion};
use crate::matching::{score_corpus, CORPUS_LIMIT};
use crate::models::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub job: Job,
    pub match_result: MatchResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub skill_gap_analysis: SkillGapReport,
    pub quick_wins: Vec<QuickWin>,
    pub career_suggestions: Vec<CareerSuggestion>,
}

/// GET /api/v1/jobs/recommended?user_id=
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RecommendedJob>>, AppError> {
    let profile = state.profiles.profile(params.user_id).await?;
    let jobs = state.jobs.active_jobs(None).await?;

    let recommended = recommend_jobs(state.scorer.as_ref(), &profile, &jobs);
    info!(
        user_id = %params.user_id,
        count = recommended.len(),
        "Served job recommendations"
    );
    Ok(Json(recommended))
}

/// GET /api/v1/jobs/:id/match?user_id=
pub async fn handle_job_match(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let job = state.jobs.job_by_id(job_id).await?;
    let profile = state.profiles.profile(params.user_id).await?;

    let match_result = state.scorer.score(&job, &profile);
    Ok(Json(JobMatchResponse { job, match_result }))
}

/// GET /api/v1/jobs/:id/platform-links
pub async fn handle_platform_links(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<PlatformLinks>, AppError> {
    let job = state.jobs.job_by_id(job_id).await?;
    Ok(Json(build_platform_links(&job)))
}

/// GET /api/v1/dashboard?user_id=
///
/// Scores the 50 newest active jobs once, then derives skill gaps and quick wins
/// from the same results. Learning resources are fetched for the top five gaps.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let profile = state.profiles.profile(params.user_id).await?;
    let jobs = state.jobs.active_jobs(Some(CORPUS_LIMIT as i64)).await?;

    let scored = score_corpus(state.scorer.as_ref(), &profile, &jobs);
    let mut skill_gap_analysis = aggregate_skill_gaps(&scored);

    let query = resource_query_skills(&skill_gap_analysis);
    if !query.is_empty() {
        let resources = state
            .resources
            .resources_for_skills(&query, RESOURCE_QUERY_LIMIT as i64)
            .await?;
        attach_learning_resources(&mut skill_gap_analysis, &resources);
    }

    let quick_wins = select_quick_wins(&scored);
    let career_suggestions = career_suggestions(&profile);

    info!(
        user_id = %params.user_id,
        gaps = skill_gap_analysis.skill_gaps.len(),
        quick_wins = quick_wins.len(),
        "Built dashboard"
    );

    Ok(Json(DashboardResponse {
        skill_gap_analysis,
        quick_wins,
        career_suggestions,
    }))
}
