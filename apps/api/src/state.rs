use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::matching::scorer::MatchScorer;
use crate::repository::{JobRepository, ProfileRepository, ResourceRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub resources: Arc<dyn ResourceRepository>,
    pub llm: LlmClient,
    /// Pluggable match scorer. Default: HeuristicMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
