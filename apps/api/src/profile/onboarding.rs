//! Onboarding form parsing. The dashboard posts it as a browser form; API
//! clients send JSON. Both land in `OnboardingRequest`.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{optional, required};
use crate::models::profile::{ExperienceLevel, ProfileUpsert};

pub const MAX_INDUSTRIES: usize = 10;

#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    #[serde(default)]
    pub full_name: String,
    pub headline: Option<String>,
    #[serde(rename = "current_role", alias = "current_position")]
    pub current_position: Option<String>,
    #[serde(rename = "target_role", alias = "target_position")]
    pub target_position: Option<String>,
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub industries: Vec<String>,
    pub career_goals: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrCsv {
    List(Vec<String>),
    Csv(String),
}

/// JSON clients send an array; HTML forms send "Fintech, Healthcare".
fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(items) => items,
        ListOrCsv::Csv(raw) => raw.split(',').map(str::to_string).collect(),
    };
    Ok(items)
}

pub fn parse_experience_level(raw: Option<&str>) -> Result<ExperienceLevel, AppError> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty()).ok_or_else(|| {
        AppError::Validation("experience_level is required".to_string())
    })?;
    match raw.to_lowercase().as_str() {
        "student" => Ok(ExperienceLevel::Student),
        "entry" | "junior" => Ok(ExperienceLevel::Entry),
        "mid" => Ok(ExperienceLevel::Mid),
        "senior" => Ok(ExperienceLevel::Senior),
        "executive" => Ok(ExperienceLevel::Executive),
        other => Err(AppError::Validation(format!(
            "experience_level '{other}' must be one of: student, entry, mid, senior, executive"
        ))),
    }
}

/// Trims, drops blanks, de-duplicates case-insensitively, keeps first-seen order.
pub fn clean_industries(industries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    industries
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .filter(|i| seen.insert(i.to_lowercase()))
        .take(MAX_INDUSTRIES)
        .collect()
}

impl OnboardingRequest {
    pub fn into_upsert(self, user_id: Uuid) -> Result<ProfileUpsert, AppError> {
        Ok(ProfileUpsert {
            user_id,
            full_name: required(&self.full_name, "full_name")?,
            experience_level: parse_experience_level(self.experience_level.as_deref())?,
            headline: optional(self.headline),
            current_position: optional(self.current_position),
            target_position: optional(self.target_position),
            industries: clean_industries(self.industries),
            career_goals: optional(self.career_goals),
        })
    }
}
