use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::profile_context;
use crate::assistant::prompts::{ROADMAP_PROMPT, ROADMAP_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::UserProfile;

const MAX_ROLE_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub title: String,
    #[serde(default)]
    pub duration_weeks: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

impl Roadmap {
    pub fn total_weeks(&self) -> u32 {
        self.phases.iter().map(|p| p.duration_weeks).sum()
    }
}

pub async fn generate_roadmap(
    llm: &LlmClient,
    target_role: &str,
    profile: Option<&UserProfile>,
) -> Result<Roadmap, AppError> {
    let target_role = validate_target_role(target_role)?;

    let context = profile
        .map(profile_context)
        .unwrap_or_else(|| "No profile available.".to_string());
    let prompt = ROADMAP_PROMPT
        .replace("{target_role}", target_role)
        .replace("{profile}", &context);

    let roadmap: Roadmap = llm
        .call_json(&prompt, ROADMAP_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    let roadmap = finalize_roadmap(roadmap, target_role)?;
    info!(
        phases = roadmap.phases.len(),
        weeks = roadmap.total_weeks(),
        "Generated learning roadmap"
    );
    Ok(roadmap)
}

fn validate_target_role(target_role: &str) -> Result<&str, AppError> {
    let target_role = target_role.trim();
    if target_role.is_empty() {
        return Err(AppError::Validation("target_role cannot be empty".to_string()));
    }
    if target_role.chars().count() > MAX_ROLE_CHARS {
        return Err(AppError::Validation(format!(
            "target_role must be at most {MAX_ROLE_CHARS} characters"
        )));
    }
    Ok(target_role)
}

/// Drops untitled phases and stamps the requested role. A roadmap with no phases is an LLM failure.
fn finalize_roadmap(mut roadmap: Roadmap, target_role: &str) -> Result<Roadmap, AppError> {
    roadmap.phases.retain(|p| !p.title.trim().is_empty());
    if roadmap.phases.is_empty() {
        return Err(AppError::Llm("Roadmap contained no phases".to_string()));
    }
    roadmap.target_role = target_role.to_string();
    Ok(roadmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_reply;

    #[test]
    fn test_parse_and_finalize_model_reply() {
        let reply = r#"```json
        {"summary": "Learn the basics first", "phases": [
            {"title": "Foundations", "durationWeeks": 4, "skills": ["HTML", "CSS"], "milestones": ["Static site"]},
            {"title": "", "durationWeeks": 2},
            {"title": "Frameworks", "durationWeeks": 6, "skills": ["React"]}
        ]}
        ```"#;
        let roadmap: Roadmap = parse_json_reply(reply).unwrap();
        let roadmap = finalize_roadmap(roadmap, "Frontend Developer").unwrap();
        assert_eq!(roadmap.target_role, "Frontend Developer");
        assert_eq!(roadmap.phases.len(), 2);
        assert_eq!(roadmap.total_weeks(), 10);
        assert!(roadmap.phases[1].milestones.is_empty());
    }

    #[test]
    fn test_roadmap_without_phases_is_error() {
        let roadmap: Roadmap = parse_json_reply(r#"{"summary": "nothing"}"#).unwrap();
        assert!(matches!(
            finalize_roadmap(roadmap, "Data Analyst"),
            Err(AppError::Llm(_))
        ));
    }

    #[test]
    fn test_target_role_validation() {
        assert!(validate_target_role("  ").is_err());
        assert!(validate_target_role(&"x".repeat(MAX_ROLE_CHARS + 1)).is_err());
        assert_eq!(validate_target_role(" Data Analyst ").unwrap(), "Data Analyst");
    }
}
