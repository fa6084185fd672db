//! Axum route handlers for the AI assistant API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assistant::chat::{chat, ChatMessage};
use crate::assistant::cv::{extract_cv_skills, extract_pdf_text};
use crate::assistant::roadmap::{generate_roadmap, Roadmap};
use crate::errors::AppError;
use crate::models::UserProfile;
use crate::repository::RepositoryError;
use crate::state::AppState;

/// Multipart field that carries the CV file.
const CV_FIELD: &str = "cv";
pub const MAX_PDF_BYTES: usize = 5 * 1024 * 1024;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Option<Uuid>,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub user_id: Option<Uuid>,
    pub target_role: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let profile = optional_profile(&state, request.user_id).await?;
    let reply = chat(&state.llm, profile.as_ref(), &request.message, &request.history).await?;
    Ok(Json(ChatResponse { reply }))
}

/// POST /api/v1/ai/extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let skills = extract_cv_skills(&state.llm, &request.cv_text).await?;
    Ok(Json(ExtractSkillsResponse { skills }))
}

/// POST /api/v1/ai/extract-skills/pdf
///
/// Multipart upload with the CV in the `cv` field.
pub async fn handle_extract_skills_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(CV_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded CV is empty".to_string()));
        }
        if bytes.len() > MAX_PDF_BYTES {
            return Err(AppError::Validation(format!(
                "Uploaded CV exceeds {} MB",
                MAX_PDF_BYTES / (1024 * 1024)
            )));
        }

        let cv_text = extract_pdf_text(bytes).await?;
        let skills = extract_cv_skills(&state.llm, &cv_text).await?;
        return Ok(Json(ExtractSkillsResponse { skills }));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{CV_FIELD}'"
    )))
}

/// POST /api/v1/ai/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let profile = optional_profile(&state, request.user_id).await?;
    let roadmap = generate_roadmap(&state.llm, &request.target_role, profile.as_ref()).await?;
    Ok(Json(roadmap))
}

/// A user without a profile still gets generic answers; a store outage is still an error.
async fn optional_profile(
    state: &AppState,
    user_id: Option<Uuid>,
) -> Result<Option<UserProfile>, AppError> {
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    match state.profiles.profile(user_id).await {
        Ok(profile) => Ok(Some(profile)),
        Err(RepositoryError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
