//! Persistence seam for per-user rows (sessions, profiles, saved résumés, achievements).
//!
//! `AppState` carries an `Arc<dyn Store>`; production uses `PgStore`.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::achievement::{AchievementRow, NewAchievement};
use crate::models::profile::{ProfileRow, ProfileUpsert};
use crate::models::resume::ResumeRow;
use crate::models::session::SessionRow;

pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_session(&self, token: &str) -> Result<Option<SessionRow>, AppError>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    /// Inserts or replaces the profile and marks onboarding as completed.
    async fn complete_onboarding(&self, profile: &ProfileUpsert) -> Result<ProfileRow, AppError>;

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, AppError>;

    async fn save_resume(&self, user_id: Uuid, document: &Value) -> Result<ResumeRow, AppError>;

    /// Newest `achieved_on` first.
    async fn list_achievements(&self, user_id: Uuid) -> Result<Vec<AchievementRow>, AppError>;

    async fn insert_achievements(
        &self,
        user_id: Uuid,
        achievements: &[NewAchievement],
    ) -> Result<Vec<AchievementRow>, AppError>;

    /// Returns false when no row with this id belongs to the user.
    async fn delete_achievement(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}
