use serde::Serialize;
use tracing::debug;

use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::{Job, UserProfile};

pub const MIN_RECOMMEND_PERCENTAGE: u32 = 30;
pub const MAX_RECOMMENDATIONS: usize = 20;

/// A job together with its match result, as returned to the jobs page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    pub job: Job,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Scores every active job, keeps those at or above 30%, and returns the best 20.
///
/// Sorting is stable: equal percentages keep the input order.
pub fn recommend_jobs(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    jobs: &[Job],
) -> Vec<RecommendedJob> {
    let mut ranked: Vec<RecommendedJob> = jobs
        .iter()
        .filter(|job| job.is_active)
        .map(|job| RecommendedJob {
            result: scorer.score(job, profile),
            job: job.clone(),
        })
        .filter(|r| r.result.match_percentage >= MIN_RECOMMEND_PERCENTAGE)
        .collect();

    ranked.sort_by(|a, b| b.result.match_percentage.cmp(&a.result.match_percentage));
    ranked.truncate(MAX_RECOMMENDATIONS);

    debug!(
        scanned = jobs.len(),
        returned = ranked.len(),
        "Ranked job recommendations"
    );
    ranked
}
