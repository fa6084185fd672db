//! Match scoring: measures how well a user profile fits a single job.
//!
//! Default: `HeuristicMatchScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; every ranking and aggregation
//! pass scores through the trait so the heuristic can be swapped wholesale.

use serde::{Deserialize, Serialize};

use crate::matching::levels::{EducationLevel, MatchQuality};
use crate::models::{Job, UserProfile};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_WEIGHT: f64 = 50.0;
pub const EXPERIENCE_WEIGHT: f64 = 25.0;
pub const CAREER_TRACK_WEIGHT: f64 = 15.0;
pub const BONUS_WEIGHT: f64 = 10.0;

/// Experience points indexed by rung distance.
const EXPERIENCE_POINTS: [f64; 4] = [25.0, 15.0, 8.0, 3.0];
/// Neutral credit when the user has not stated a career track.
const NO_TRACK_CREDIT: f64 = 5.0;
/// Track tokens this short are ignored ("and", "dev", "of").
const MIN_TRACK_TOKEN_CHARS: usize = 4;
const EDUCATION_BONUS: f64 = 5.0;
const REMOTE_BONUS: f64 = 5.0;
/// "Consider learning" is only offered for this many missing skills or fewer.
const MAX_MISSING_FOR_LEARNING_TIP: usize = 3;
const APPLY_ENCOURAGEMENT_THRESHOLD: u32 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Weighted contributions reported to clients.
///
/// Every field is the *total* score re-projected onto that term's weight
/// (`round(total / 100 * weight)`), not the term's own value. Clients already
/// depend on these numbers; the real per-term values are in [`TermScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub skills_match: u32,
    pub experience_match: u32,
    pub career_track_match: u32,
    pub bonus_points: u32,
}

/// Unrounded points each term actually contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermScores {
    pub skills: f64,
    pub experience: f64,
    pub career_track: f64,
    pub bonus: f64,
}

impl TermScores {
    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.career_track + self.bonus
    }
}

/// Derived on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Capped sum of all terms before rounding (0.0 – 100.0).
    pub match_score: f64,
    pub match_percentage: u32,
    pub match_quality: MatchQuality,
    /// Lowercased job skills covered by the profile.
    pub matched_skills: Vec<String>,
    /// Lowercased job skills not covered by the profile.
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub breakdown: MatchBreakdown,
    pub term_scores: TermScores,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one job against one profile. Implementations must be pure:
/// same inputs, same result, no I/O.
pub trait MatchScorer: Send + Sync {
    fn score(&self, job: &Job, profile: &UserProfile) -> MatchResult;
}

/// Additive 100-point heuristic over skills, experience, career track, and bonuses.
pub struct HeuristicMatchScorer;

impl MatchScorer for HeuristicMatchScorer {
    fn score(&self, job: &Job, profile: &UserProfile) -> MatchResult {
        calculate_job_match(job, profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `job` for `profile`.
///
/// 1. Skills (50): share of job skills covered, bidirectional substring match.
/// 2. Experience (25): 25 / 15 / 8 / 3 by rung distance.
/// 3. Career track (15): share of track tokens found in title or description;
///    a flat 5 when no track is set.
/// 4. Bonus (10): +5 education keyword in description, +5 remote.
pub fn calculate_job_match(job: &Job, profile: &UserProfile) -> MatchResult {
    let mut reasons = Vec::new();

    let skills = score_skills(job, profile, &mut reasons);
    let experience = score_experience(job, profile, &mut reasons);
    let career_track = score_career_track(job, profile, &mut reasons);
    let bonus = score_bonus(job, profile, &mut reasons);

    let term_scores = TermScores {
        skills: skills.points,
        experience,
        career_track,
        bonus,
    };

    let match_score = term_scores.total().clamp(0.0, 100.0);
    let match_percentage = match_score.round() as u32;

    let mut recommendations = Vec::new();
    if (1..=MAX_MISSING_FOR_LEARNING_TIP).contains(&skills.missing.len()) {
        recommendations.push(format!(
            "Consider learning: {}",
            skills.missing.join(", ")
        ));
    }
    if match_percentage >= APPLY_ENCOURAGEMENT_THRESHOLD {
        recommendations.push("You're a strong candidate. Consider applying!".to_string());
    }

    MatchResult {
        match_score,
        match_percentage,
        match_quality: MatchQuality::from_percentage(match_percentage),
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        match_reasons: reasons,
        recommendations,
        breakdown: breakdown_from_total(match_score),
        term_scores,
    }
}

struct SkillTerm {
    points: f64,
    matched: Vec<String>,
    missing: Vec<String>,
}

fn score_skills(job: &Job, profile: &UserProfile, reasons: &mut Vec<String>) -> SkillTerm {
    let job_skills = unique_lowercase(&job.skills);
    let user_skills = profile.normalized_skills();

    if job_skills.is_empty() {
        reasons.push("This job lists no skills to match against".to_string());
        return SkillTerm {
            points: 0.0,
            matched: vec![],
            missing: vec![],
        };
    }
    if user_skills.is_empty() {
        reasons.push("No skills on your profile to match against this job".to_string());
        return SkillTerm {
            points: 0.0,
            matched: vec![],
            missing: job_skills,
        };
    }

    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .into_iter()
        .partition(|job_skill| skills_overlap(job_skill, &user_skills));

    let total = matched.len() + missing.len();
    let points = (matched.len() as f64 / total as f64) * SKILLS_WEIGHT;

    if matched.is_empty() {
        reasons.push(format!("None of the {total} required skills are on your profile"));
    } else {
        reasons.push(format!(
            "You have {} of {} required skills: {}",
            matched.len(),
            total,
            matched.join(", ")
        ));
    }

    SkillTerm {
        points,
        matched,
        missing,
    }
}

/// Loose match: either name contains the other ("react" ~ "react.js").
fn skills_overlap(job_skill: &str, user_skills: &[String]) -> bool {
    user_skills
        .iter()
        .any(|user_skill| job_skill.contains(user_skill.as_str()) || user_skill.contains(job_skill))
}

fn score_experience(job: &Job, profile: &UserProfile, reasons: &mut Vec<String>) -> f64 {
    let user_level = profile.effective_experience_level();
    let job_level = job.experience_level;
    let distance = user_level.distance(job_level);

    let reason = match distance {
        0 => format!("Your experience level ({user_level}) matches exactly"),
        1 => format!("Your experience level ({user_level}) is close to the required {job_level}"),
        2 => format!(
            "Your experience level ({user_level}) is two levels from the required {job_level}"
        ),
        _ => format!(
            "Your experience level ({user_level}) differs significantly from the required {job_level}"
        ),
    };
    reasons.push(reason);

    EXPERIENCE_POINTS[distance.min(EXPERIENCE_POINTS.len() - 1)]
}

fn score_career_track(job: &Job, profile: &UserProfile, reasons: &mut Vec<String>) -> f64 {
    let track = profile
        .preferred_career_track
        .as_deref()
        .map(str::trim)
        .unwrap_or("");

    if track.is_empty() {
        reasons.push("No career track preference set".to_string());
        return NO_TRACK_CREDIT;
    }

    let tokens: Vec<String> = track
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TRACK_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect();

    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let matched = tokens
        .iter()
        .filter(|t| title.contains(t.as_str()) || description.contains(t.as_str()))
        .count();

    if matched == 0 {
        reasons.push(format!("Not aligned with your preferred career track ({track})"));
        return 0.0;
    }

    reasons.push(format!("Aligns with your preferred career track ({track})"));
    ((matched as f64 / tokens.len() as f64) * CAREER_TRACK_WEIGHT).min(CAREER_TRACK_WEIGHT)
}

fn score_bonus(job: &Job, profile: &UserProfile, reasons: &mut Vec<String>) -> f64 {
    let mut bonus = 0.0;

    if let Some(level) = profile
        .education_level
        .as_deref()
        .and_then(EducationLevel::parse)
    {
        let description = job.description.to_lowercase();
        if level.keywords().iter().any(|kw| description.contains(kw)) {
            bonus += EDUCATION_BONUS;
            reasons.push("Your education level fits the job requirements".to_string());
        }
    }

    if job.is_remote {
        bonus += REMOTE_BONUS;
        reasons.push("Remote position".to_string());
    }

    bonus.min(BONUS_WEIGHT)
}

fn breakdown_from_total(total: f64) -> MatchBreakdown {
    let share = |weight: f64| ((total / 100.0) * weight).round() as u32;
    MatchBreakdown {
        skills_match: share(SKILLS_WEIGHT),
        experience_match: share(EXPERIENCE_WEIGHT),
        career_track_match: share(CAREER_TRACK_WEIGHT),
        bonus_points: share(BONUS_WEIGHT),
    }
}

/// Trimmed, lowercased, blank-free, first occurrence wins.
fn unique_lowercase(skills: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(skills.len());
    for skill in skills {
        let lower = skill.trim().to_lowercase();
        if !lower.is_empty() && !seen.contains(&lower) {
            seen.push(lower);
        }
    }
    seen
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
