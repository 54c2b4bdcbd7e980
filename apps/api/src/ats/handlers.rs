//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::ats::analysis::{analyze_resume, AtsAnalysis};
use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::extract::{optional, ApiJson};
use crate::uploads::{extract_pdf_text, read_pdf_upload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: Option<String>,
}

/// POST /api/v1/ats/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    user: SessionUser,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    tracing::info!("ATS analysis requested by user {}", user.user_id);
    let job_description = optional(request.job_description);
    let analysis = analyze_resume(
        state.llm.as_ref(),
        &request.resume_text,
        job_description.as_deref(),
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /api/v1/ats/analyze-file
///
/// Multipart: `file` (PDF) and an optional `job_description` text field.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    user: SessionUser,
    multipart: Multipart,
) -> Result<Json<AtsAnalysis>, AppError> {
    let upload = read_pdf_upload(multipart, state.max_upload_bytes).await?;
    let job_description = upload.field("job_description").map(str::to_string);
    let resume_text = extract_pdf_text(upload.bytes).await?;

    tracing::info!(
        "ATS file analysis for user {}: {} chars extracted",
        user.user_id,
        resume_text.len()
    );

    let analysis = analyze_resume(
        state.llm.as_ref(),
        &resume_text,
        job_description.as_deref(),
    )
    .await?;
    Ok(Json(analysis))
}
