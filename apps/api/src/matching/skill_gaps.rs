//! Skill-gap aggregation: tallies the skills a user is missing across jobs
//! they partially match, and pairs the most frequent ones with learning resources.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::matching::scorer::MatchScorer;
use crate::matching::{score_corpus, ScoredJob};
use crate::models::{Job, LearningResource, UserProfile};

/// Partial match window: `[PARTIAL_MATCH_MIN, PARTIAL_MATCH_MAX)`.
pub const PARTIAL_MATCH_MIN: u32 = 30;
pub const PARTIAL_MATCH_MAX: u32 = 80;
pub const MAX_GAPS: usize = 10;
/// Only this many top gaps drive the learning-resource lookup.
pub const RESOURCE_QUERY_SKILLS: usize = 5;
pub const RESOURCE_QUERY_LIMIT: usize = 20;
const MAX_SAMPLES: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialJob {
    pub title: String,
    pub company: String,
    pub current_match: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    /// Casing of the first job that listed the skill.
    pub skill_name: String,
    pub frequency: u32,
    pub job_titles: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
    pub potential_jobs: Vec<PotentialJob>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub skill_gaps: Vec<SkillGap>,
    pub partial_match_count: usize,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Full pipeline over a raw job list: snapshot, score, aggregate, attach resources.
#[allow(dead_code)]
pub fn compute_skill_gaps(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    jobs: &[Job],
    resources: &[LearningResource],
) -> SkillGapReport {
    let scored = score_corpus(scorer, profile, jobs);
    let mut report = aggregate_skill_gaps(&scored);
    attach_learning_resources(&mut report, resources);
    report
}

/// Tallies missing skills over partial matches. Resources are left empty.
pub fn aggregate_skill_gaps(scored: &[ScoredJob<'_>]) -> SkillGapReport {
    let partial: Vec<&ScoredJob<'_>> = scored
        .iter()
        .filter(|s| {
            (PARTIAL_MATCH_MIN..PARTIAL_MATCH_MAX).contains(&s.result.match_percentage)
        })
        .collect();

    let mut gaps: Vec<SkillGap> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for scored_job in &partial {
        let job = scored_job.job;
        for missing in &scored_job.result.missing_skills {
            let key = missing.to_lowercase();
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                gaps.push(SkillGap {
                    skill_name: display_name(job, &key),
                    frequency: 0,
                    job_titles: Vec::new(),
                    learning_resources: Vec::new(),
                    potential_jobs: Vec::new(),
                });
                gaps.len() - 1
            });

            let gap = &mut gaps[slot];
            gap.frequency += 1;
            if gap.job_titles.len() < MAX_SAMPLES && !gap.job_titles.contains(&job.title) {
                gap.job_titles.push(job.title.clone());
            }
            if gap.potential_jobs.len() < MAX_SAMPLES {
                gap.potential_jobs.push(PotentialJob {
                    title: job.title.clone(),
                    company: job.company.clone(),
                    current_match: scored_job.result.match_percentage,
                });
            }
        }
    }

    let distinct = gaps.len();
    // stable: equal frequencies keep first-seen order
    gaps.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    gaps.truncate(MAX_GAPS);

    debug!(
        corpus = scored.len(),
        partial = partial.len(),
        distinct,
        "Aggregated skill gaps"
    );

    SkillGapReport {
        skill_gaps: gaps,
        partial_match_count: partial.len(),
        summary: format!(
            "Found {distinct} skill gaps across {} jobs where you're a partial match. \
             Learning these skills could unlock more opportunities.",
            partial.len()
        ),
    }
}

/// Lowercased names of the top gaps, used to query the resource store.
pub fn resource_query_skills(report: &SkillGapReport) -> Vec<String> {
    report
        .skill_gaps
        .iter()
        .take(RESOURCE_QUERY_SKILLS)
        .map(|g| g.skill_name.to_lowercase())
        .collect()
}

/// Narrows `resources` to those tagged with a top-5 gap skill (at most 20), then
/// gives each gap up to 3 of them whose skills overlap its name.
pub fn attach_learning_resources(report: &mut SkillGapReport, resources: &[LearningResource]) {
    let query = resource_query_skills(report);
    if query.is_empty() {
        return;
    }

    let pool: Vec<&LearningResource> = resources
        .iter()
        .filter(|r| {
            r.skills
                .iter()
                .any(|s| query.contains(&s.trim().to_lowercase()))
        })
        .take(RESOURCE_QUERY_LIMIT)
        .collect();

    for gap in &mut report.skill_gaps {
        gap.learning_resources = pool
            .iter()
            .filter(|r| r.covers_skill(&gap.skill_name))
            .take(MAX_SAMPLES)
            .map(|r| (*r).clone())
            .collect();
    }
}

fn display_name(job: &Job, key: &str) -> String {
    job.skills
        .iter()
        .map(|s| s.trim())
        .find(|s| s.to_lowercase() == key)
        .unwrap_or(key)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::levels::ExperienceLevel;
    use crate::matching::scorer::HeuristicMatchScorer;
    use crate::matching::test_support::{make_job, make_profile};
    use crate::models::CostType;
    use uuid::Uuid;

    fn profile() -> UserProfile {
        make_profile(&["Rust"], Some(ExperienceLevel::Mid))
    }

    fn make_resource(title: &str, skills: &[&str]) -> LearningResource {
        LearningResource {
            id: Uuid::new_v4(),
            title: title.to_string(),
            platform: "YouTube".to_string(),
            url: format!("https://example.com/{title}"),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            cost_type: CostType::Free,
            level: None,
            rating: Some(4.5),
        }
    }

    #[test]
    fn test_docker_required_by_three_partial_jobs() {
        // each job: 25 (1 of 2 skills) + 25 + 5 = 55
        let jobs: Vec<Job> = (0..3)
            .map(|i| make_job(&format!("Backend {i}"), &["Rust", "Docker"], ExperienceLevel::Mid))
            .collect();

        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);

        assert_eq!(report.partial_match_count, 3);
        assert_eq!(report.skill_gaps.len(), 1);
        let docker = &report.skill_gaps[0];
        assert!(docker.skill_name.eq_ignore_ascii_case("docker"));
        assert_eq!(docker.frequency, 3);
        assert_eq!(docker.job_titles.len(), 3);
        assert!(docker.potential_jobs.iter().all(|p| p.current_match == 55));
    }

    #[test]
    fn test_only_partial_matches_contribute() {
        let jobs = vec![
            make_job("Strong", &["Rust"], ExperienceLevel::Mid), // 80, excluded
            make_job("Weak", &["Kafka"], ExperienceLevel::Fresher), // 13, excluded
            make_job("Partial", &["Rust", "Go"], ExperienceLevel::Mid), // 55
        ];
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);
        assert_eq!(report.partial_match_count, 1);
        let names: Vec<&str> = report.skill_gaps.iter().map(|g| g.skill_name.as_str()).collect();
        assert_eq!(names, vec!["Go"]);
    }

    #[test]
    fn test_case_insensitive_identity_keeps_first_casing() {
        let jobs = vec![
            make_job("A", &["Rust", "Docker"], ExperienceLevel::Mid),
            make_job("B", &["rust", "DOCKER"], ExperienceLevel::Mid),
        ];
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);
        assert_eq!(report.skill_gaps.len(), 1);
        assert_eq!(report.skill_gaps[0].skill_name, "Docker");
        assert_eq!(report.skill_gaps[0].frequency, 2);
    }

    #[test]
    fn test_samples_capped_and_titles_distinct() {
        let jobs: Vec<Job> = ["Dev", "Dev", "Ops", "SRE", "Cloud"]
            .iter()
            .map(|t| make_job(t, &["Rust", "Docker"], ExperienceLevel::Mid))
            .collect();
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);
        let docker = &report.skill_gaps[0];
        assert_eq!(docker.frequency, 5);
        assert_eq!(docker.job_titles, vec!["Dev", "Ops", "SRE"]);
        assert_eq!(docker.potential_jobs.len(), 3);
    }

    #[test]
    fn test_sorted_by_frequency_and_truncated_to_ten() {
        let mut jobs = vec![
            make_job("A", &["Rust", "Docker"], ExperienceLevel::Mid),
            make_job("B", &["Rust", "Docker"], ExperienceLevel::Mid),
        ];
        // eleven one-off skills, each in its own partial job
        for i in 0..11 {
            let skill = format!("Skill{i}");
            jobs.push(make_job(&format!("J{i}"), &["Rust", skill.as_str()], ExperienceLevel::Mid));
        }

        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);
        assert_eq!(report.skill_gaps.len(), MAX_GAPS);
        assert_eq!(report.skill_gaps[0].skill_name, "Docker");
        assert_eq!(report.skill_gaps[1].skill_name, "Skill0");
        assert!(report.summary.contains("12 skill gaps"));
        assert!(report.summary.contains("13 jobs"));
    }

    #[test]
    fn test_resource_query_uses_top_five_lowercased() {
        let mut jobs = Vec::new();
        for i in 0..7 {
            let skill = format!("Tool{i}");
            jobs.push(make_job(&format!("J{i}"), &["Rust", skill.as_str()], ExperienceLevel::Mid));
        }
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &[]);
        assert_eq!(
            resource_query_skills(&report),
            vec!["tool0", "tool1", "tool2", "tool3", "tool4"]
        );
    }

    #[test]
    fn test_resources_attached_by_overlap_up_to_three() {
        let jobs = vec![make_job("A", &["Rust", "Docker"], ExperienceLevel::Mid)];
        let resources = vec![
            make_resource("docker-1", &["docker"]),
            make_resource("docker-2", &["Docker", "Kubernetes"]),
            make_resource("docker-3", &["DOCKER"]),
            make_resource("docker-4", &["docker"]),
            make_resource("python", &["Python"]),
        ];
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &resources);
        let attached: Vec<&str> = report.skill_gaps[0]
            .learning_resources
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(attached, vec!["docker-1", "docker-2", "docker-3"]);
    }

    #[test]
    fn test_resources_outside_top_five_query_not_used() {
        // "docker compose" overlaps by substring but is not an exact top-5 skill tag
        let jobs = vec![make_job("A", &["Rust", "Docker"], ExperienceLevel::Mid)];
        let resources = vec![make_resource("compose", &["Docker Compose"])];
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &jobs, &resources);
        assert!(report.skill_gaps[0].learning_resources.is_empty());
    }

    #[test]
    fn test_no_partial_matches_yields_empty_report() {
        let report = compute_skill_gaps(&HeuristicMatchScorer, &profile(), &[], &[]);
        assert!(report.skill_gaps.is_empty());
        assert_eq!(report.partial_match_count, 0);
        assert!(report.summary.contains("0 skill gaps"));
    }
}
