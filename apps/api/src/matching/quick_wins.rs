use serde::Serialize;
use uuid::Uuid;

use crate::matching::levels::JobType;
use crate::matching::scorer::MatchScorer;
use crate::matching::{score_corpus, ScoredJob};
use crate::models::{Job, UserProfile};

/// Near-miss window: `[QUICK_WIN_MIN, QUICK_WIN_MAX)`.
pub const QUICK_WIN_MIN: u32 = 65;
pub const QUICK_WIN_MAX: u32 = 80;
pub const MAX_QUICK_WINS: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWinJob {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
}

/// A job the user is close to qualifying for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWin {
    pub job: QuickWinJob,
    pub match_percentage: u32,
    pub missing_skills: Vec<String>,
    pub matched_skills: Vec<String>,
}

#[allow(dead_code)]
pub fn find_quick_wins(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    jobs: &[Job],
) -> Vec<QuickWin> {
    select_quick_wins(&score_corpus(scorer, profile, jobs))
}

/// Picks the five best matches in the near-miss window, highest first.
pub fn select_quick_wins(scored: &[ScoredJob<'_>]) -> Vec<QuickWin> {
    let mut wins: Vec<&ScoredJob<'_>> = scored
        .iter()
        .filter(|s| (QUICK_WIN_MIN..QUICK_WIN_MAX).contains(&s.result.match_percentage))
        .collect();
    wins.sort_by(|a, b| b.result.match_percentage.cmp(&a.result.match_percentage));

    wins.into_iter()
        .take(MAX_QUICK_WINS)
        .map(|s| QuickWin {
            job: QuickWinJob {
                id: s.job.id,
                title: s.job.title.clone(),
                company: s.job.company.clone(),
                location: s.job.location.clone(),
                job_type: s.job.job_type,
            },
            match_percentage: s.result.match_percentage,
            missing_skills: s.result.missing_skills.clone(),
            matched_skills: s.result.matched_skills.clone(),
        })
        .collect()
}
