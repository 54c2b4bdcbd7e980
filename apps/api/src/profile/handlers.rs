//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::extract::JsonOrForm;
use crate::models::profile::ProfileRow;
use crate::profile::onboarding::OnboardingRequest;
use crate::state::AppState;

/// Profile as seen by the dashboard. Users who have not onboarded yet get the
/// `Pending` shape so the client can route them into the onboarding flow.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Complete(ProfileRow),
    Pending {
        user_id: Uuid,
        onboarding_completed: bool,
    },
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let response = match state.store.get_profile(user.user_id).await? {
        Some(profile) => ProfileResponse::Complete(profile),
        None => ProfileResponse::Pending {
            user_id: user.user_id,
            onboarding_completed: false,
        },
    };
    Ok(Json(response))
}

/// POST /api/v1/onboarding
///
/// Accepts JSON or a url-encoded form.
pub async fn handle_onboarding(
    State(state): State<AppState>,
    user: SessionUser,
    JsonOrForm(request): JsonOrForm<OnboardingRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    let upsert = request.into_upsert(user.user_id)?;
    let profile = state.store.complete_onboarding(&upsert).await?;
    Ok(Json(profile))
}
