use serde::Deserialize;
use tracing::{debug, info};

use crate::assistant::prompts::{CV_SKILLS_PROMPT, CV_SKILLS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// CV text is cut to this many characters before it is sent to the model.
const MAX_CV_CHARS: usize = 12_000;
const MIN_CV_CHARS: usize = 20;

#[derive(Debug, Deserialize)]
struct ExtractedSkills {
    #[serde(default)]
    skills: Vec<String>,
}

/// Pulls text out of an uploaded PDF. Runs on the blocking pool.
pub async fn extract_pdf_text(bytes: bytes::Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("Could not read PDF".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }
    debug!(chars = text.chars().count(), "Extracted text from PDF");
    Ok(text)
}

/// Asks the model for the skills mentioned in `cv_text`; returns a cleaned list.
pub async fn extract_cv_skills(llm: &LlmClient, cv_text: &str) -> Result<Vec<String>, AppError> {
    let cv_text = cv_text.trim();
    if cv_text.chars().count() < MIN_CV_CHARS {
        return Err(AppError::Validation(format!(
            "cv_text must be at least {MIN_CV_CHARS} characters"
        )));
    }

    let truncated: String = cv_text.chars().take(MAX_CV_CHARS).collect();
    let prompt = CV_SKILLS_PROMPT.replace("{cv_text}", &truncated);
    let extracted: ExtractedSkills = llm
        .call_json(&prompt, CV_SKILLS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("CV skill extraction failed: {e}")))?;

    let skills = clean_skills(extracted.skills);
    info!(count = skills.len(), "Extracted skills from CV");
    Ok(skills)
}

/// Trims, drops blanks, and removes case-insensitive duplicates (first spelling wins).
pub fn clean_skills(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut skills = Vec::new();
    for skill in raw {
        let skill = skill.trim();
        let key = skill.to_lowercase();
        if skill.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        skills.push(skill.to_string());
    }
    skills
}
