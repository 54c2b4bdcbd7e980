//! Axum route handlers for the Achievements API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::achievements::extraction::{extract_achievements, new_manual_achievement};
use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::extract::{required, ApiJson};
use crate::models::achievement::{AchievementCategory, AchievementRow, Provenance};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achieved_on: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractAchievementsRequest {
    #[serde(default)]
    pub text: String,
    /// "resume" marks the records as imported from a résumé.
    pub source: Option<String>,
}

/// GET /api/v1/achievements
pub async fn handle_list_achievements(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<Vec<AchievementRow>>, AppError> {
    let rows = state.store.list_achievements(user.user_id).await?;
    Ok(Json(rows))
}

/// POST /api/v1/achievements
pub async fn handle_create_achievement(
    State(state): State<AppState>,
    user: SessionUser,
    ApiJson(request): ApiJson<CreateAchievementRequest>,
) -> Result<(StatusCode, Json<AchievementRow>), AppError> {
    let category = request
        .category
        .as_deref()
        .map(AchievementCategory::parse_lenient)
        .unwrap_or(AchievementCategory::Other);
    let achievement = new_manual_achievement(
        &request.title,
        &request.description,
        &request.achieved_on,
        category,
    )?;

    let mut rows = state
        .store
        .insert_achievements(user.user_id, std::slice::from_ref(&achievement))
        .await?;
    let row = rows
        .pop()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Insert returned no achievement row")))?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/achievements/extract
pub async fn handle_extract_achievements(
    State(state): State<AppState>,
    user: SessionUser,
    ApiJson(request): ApiJson<ExtractAchievementsRequest>,
) -> Result<(StatusCode, Json<Vec<AchievementRow>>), AppError> {
    let text = required(&request.text, "text")?;
    let provenance = match request.source.as_deref().map(str::trim) {
        Some("resume") => Provenance::ResumeImport,
        _ => Provenance::AiExtracted,
    };

    let achievements = extract_achievements(state.llm.as_ref(), &text, provenance).await?;
    let rows = state
        .store
        .insert_achievements(user.user_id, &achievements)
        .await?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// DELETE /api/v1/achievements/:id
pub async fn handle_delete_achievement(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_achievement(user.user_id, id).await? {
        return Err(AppError::NotFound(format!("Achievement {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
