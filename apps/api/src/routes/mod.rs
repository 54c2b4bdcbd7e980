pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::achievements::handlers as achievements;
use crate::ats::handlers as ats;
use crate::career_tools::handlers as career_tools;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

/// Room for the non-file multipart fields sent alongside an upload.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume builder
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).put(resume::handle_save_resume),
        )
        .route(
            "/api/v1/resume/parse",
            post(resume::handle_parse_resume).layer(upload_limit.clone()),
        )
        .route("/api/v1/resume/enhance", post(resume::handle_enhance))
        .route("/api/v1/resume/summary", post(resume::handle_summary))
        // ATS analysis
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        .route(
            "/api/v1/ats/analyze-file",
            post(ats::handle_analyze_file).layer(upload_limit),
        )
        // Career tools
        .route("/api/v1/roadmap", post(roadmap::handle_roadmap))
        .route("/api/v1/cover-letter", post(career_tools::handle_cover_letter))
        .route(
            "/api/v1/interview/questions",
            post(career_tools::handle_interview_questions),
        )
        // Achievements
        .route(
            "/api/v1/achievements",
            get(achievements::handle_list_achievements)
                .post(achievements::handle_create_achievement),
        )
        .route(
            "/api/v1/achievements/extract",
            post(achievements::handle_extract_achievements),
        )
        .route(
            "/api/v1/achievements/:id",
            delete(achievements::handle_delete_achievement),
        )
        // Profile and onboarding
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/onboarding", post(profile::handle_onboarding))
        .with_state(state)
}
