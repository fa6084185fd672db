// Matching core: scoring, ranking, skill-gap aggregation, and profile heuristics.
// Everything except `handlers` is pure and synchronous; handlers fetch data and pass it in.

pub mod handlers;
pub mod levels;
pub mod platform_links;
pub mod quick_wins;
pub mod recommender;
pub mod scorer;
pub mod skill_gaps;
pub mod suggestions;

#[cfg(test)]
pub(crate) mod test_support;

use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::{Job, UserProfile};

/// Upper bound on jobs read for dashboard aggregation.
pub const CORPUS_LIMIT: usize = 50;

/// Active jobs only, newest first, at most `CORPUS_LIMIT`.
pub fn corpus_snapshot(jobs: &[Job]) -> Vec<&Job> {
    let mut active: Vec<&Job> = jobs.iter().filter(|j| j.is_active).collect();
    active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    active.truncate(CORPUS_LIMIT);
    active
}

/// One job from the dashboard corpus with its match result.
#[derive(Debug, Clone)]
pub struct ScoredJob<'a> {
    pub job: &'a Job,
    pub result: MatchResult,
}

/// Scores the dashboard corpus once so skill gaps and quick wins share results.
pub fn score_corpus<'a>(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    jobs: &'a [Job],
) -> Vec<ScoredJob<'a>> {
    corpus_snapshot(jobs)
        .into_iter()
        .map(|job| ScoredJob {
            job,
            result: scorer.score(job, profile),
        })
        .collect()
}
