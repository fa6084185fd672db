use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::profile_context;
use crate::assistant::prompts::CHAT_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::{Content, LlmClient, Role};
use crate::models::UserProfile;

/// Older turns beyond this are dropped before the call.
const MAX_HISTORY_TURNS: usize = 10;
const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Builds the turn list: the most recent history, then the new message.
pub fn build_conversation(history: &[ChatMessage], message: &str) -> Vec<Content> {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    history[start..]
        .iter()
        .filter(|m| !m.text.trim().is_empty())
        .map(|m| Content::text(m.role, m.text.clone()))
        .chain(std::iter::once(Content::text(Role::User, message)))
        .collect()
}

pub async fn chat(
    llm: &LlmClient,
    profile: Option<&UserProfile>,
    message: &str,
    history: &[ChatMessage],
) -> Result<String, AppError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let context = profile
        .map(profile_context)
        .unwrap_or_else(|| "No profile available.".to_string());
    let system = CHAT_SYSTEM.replace("{profile}", &context);
    let contents = build_conversation(history, message);
    debug!(turns = contents.len(), "Sending chat conversation");

    let response = llm.call(&contents, &system).await?;
    response
        .text()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| AppError::Llm("Chat reply was empty".to_string()))
}
