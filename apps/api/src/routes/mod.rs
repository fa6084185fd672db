pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::matching::handlers as matching;
use crate::state::AppState;

/// Multipart framing on top of the largest accepted PDF.
const PDF_BODY_LIMIT: usize = assistant::MAX_PDF_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/jobs/recommended",
            get(matching::handle_recommended_jobs),
        )
        .route("/api/v1/jobs/:id/match", get(matching::handle_job_match))
        .route(
            "/api/v1/jobs/:id/platform-links",
            get(matching::handle_platform_links),
        )
        .route("/api/v1/dashboard", get(matching::handle_dashboard))
        // Assistant API
        .route("/api/v1/ai/chat", post(assistant::handle_chat))
        .route(
            "/api/v1/ai/extract-skills",
            post(assistant::handle_extract_skills),
        )
        .route(
            "/api/v1/ai/extract-skills/pdf",
            post(assistant::handle_extract_skills_pdf).layer(DefaultBodyLimit::max(PDF_BODY_LIMIT)),
        )
        .route("/api/v1/ai/roadmap", post(assistant::handle_roadmap))
        .with_state(state)
}
