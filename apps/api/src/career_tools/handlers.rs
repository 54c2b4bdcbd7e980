//! Axum route handlers for cover letters and interview preparation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::SessionUser;
use crate::career_tools::cover_letter::{write_cover_letter, CoverLetterInput, LetterTone};
use crate::career_tools::interview::{prepare_questions, question_count, InterviewQuestionSet};
use crate::errors::AppError;
use crate::extract::{optional, required, ApiJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    pub company_name: Option<String>,
    #[serde(default)]
    pub tone: LetterTone,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    #[serde(default)]
    pub role: String,
    pub job_description: Option<String>,
    pub count: Option<i64>,
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    _user: SessionUser,
    ApiJson(request): ApiJson<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let input = CoverLetterInput {
        resume_text: required(&request.resume_text, "resume_text")?,
        job_description: required(&request.job_description, "job_description")?,
        company_name: optional(request.company_name),
        tone: request.tone,
    };

    let cover_letter = write_cover_letter(state.llm.as_ref(), &input).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    _user: SessionUser,
    ApiJson(request): ApiJson<InterviewRequest>,
) -> Result<Json<InterviewQuestionSet>, AppError> {
    let role = required(&request.role, "role")?;
    let job_description = optional(request.job_description);
    let count = question_count(request.count);

    let set = prepare_questions(state.llm.as_ref(), &role, job_description.as_deref(), count).await?;
    Ok(Json(set))
}
