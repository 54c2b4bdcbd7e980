use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Student,
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Student => "student",
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub full_name: String,
    pub headline: Option<String>,
    /// Stored as `current_position`; `current_role` is reserved in Postgres.
    #[serde(rename = "current_role")]
    pub current_position: Option<String>,
    #[serde(rename = "target_role")]
    pub target_position: Option<String>,
    pub experience_level: String,
    pub industries: Vec<String>,
    pub career_goals: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values written by the onboarding flow.
#[derive(Debug, Clone)]
pub struct ProfileUpsert {
    pub user_id: Uuid,
    pub full_name: String,
    pub headline: Option<String>,
    pub current_position: Option<String>,
    pub target_position: Option<String>,
    pub experience_level: ExperienceLevel,
    pub industries: Vec<String>,
    pub career_goals: Option<String>,
}
