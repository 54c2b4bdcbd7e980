use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Certification,
    Project,
    Award,
    Promotion,
    Publication,
    Skill,
    #[serde(other)]
    Other,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Certification => "certification",
            AchievementCategory::Project => "project",
            AchievementCategory::Award => "award",
            AchievementCategory::Promotion => "promotion",
            AchievementCategory::Publication => "publication",
            AchievementCategory::Skill => "skill",
            AchievementCategory::Other => "other",
        }
    }

    /// Model output uses loose labels ("Certificate", "side project"); anything
    /// unrecognised lands in `Other`.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "certification" | "certificate" | "license" => AchievementCategory::Certification,
            "project" | "side project" | "side_project" => AchievementCategory::Project,
            "award" | "honor" | "honour" | "recognition" => AchievementCategory::Award,
            "promotion" => AchievementCategory::Promotion,
            "publication" | "paper" | "article" => AchievementCategory::Publication,
            "skill" => AchievementCategory::Skill,
            _ => AchievementCategory::Other,
        }
    }
}

/// Where an achievement record came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Manual,
    AiExtracted,
    ResumeImport,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Manual => "manual",
            Provenance::AiExtracted => "ai_extracted",
            Provenance::ResumeImport => "resume_import",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AchievementRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub achieved_on: NaiveDate,
    pub category: String,
    pub provenance: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub achieved_on: NaiveDate,
    pub category: AchievementCategory,
    pub provenance: Provenance,
}
