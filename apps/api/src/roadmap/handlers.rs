//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::extract::{required, ApiJson};
use crate::roadmap::planner::{
    generate_roadmap, CareerRoadmap, RoadmapInput, DEFAULT_TIMEFRAME_MONTHS, MAX_TIMEFRAME_MONTHS,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub timeframe_months: Option<u32>,
}

impl RoadmapRequest {
    fn validate(self) -> Result<RoadmapInput, AppError> {
        let timeframe_months = self.timeframe_months.unwrap_or(DEFAULT_TIMEFRAME_MONTHS);
        if !(1..=MAX_TIMEFRAME_MONTHS).contains(&timeframe_months) {
            return Err(AppError::Validation(format!(
                "timeframe_months must be between 1 and {MAX_TIMEFRAME_MONTHS}"
            )));
        }

        Ok(RoadmapInput {
            current_role: required(&self.current_role, "current_role")?,
            target_role: required(&self.target_role, "target_role")?,
            skills: self
                .skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            experience_years: self.experience_years,
            timeframe_months,
        })
    }
}

/// POST /api/v1/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    user: SessionUser,
    ApiJson(request): ApiJson<RoadmapRequest>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let input = request.validate()?;
    tracing::info!(
        "Roadmap requested by user {}: {} -> {}",
        user.user_id,
        input.current_role,
        input.target_role
    );
    let roadmap = generate_roadmap(state.llm.as_ref(), &input).await?;
    Ok(Json(roadmap))
}
