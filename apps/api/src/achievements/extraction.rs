//! Achievement extraction and normalization.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::achievements::prompts::{ACHIEVEMENT_EXTRACT_PROMPT, ACHIEVEMENT_EXTRACT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, JSON_ONLY_SYSTEM, NO_FABRICATION};
use crate::llm_client::CompletionClient;
use crate::models::achievement::{AchievementCategory, NewAchievement, Provenance};

pub const MAX_TITLE_CHARS: usize = 120;
const MAX_SOURCE_CHARS: usize = 15_000;

#[derive(Debug, Deserialize)]
struct ExtractedAchievements {
    #[serde(default)]
    achievements: Vec<ExtractedAchievement>,
}

#[derive(Debug, Deserialize)]
struct ExtractedAchievement {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    category: String,
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of month) and `YYYY` (January 1st).
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

/// Validates a manually entered achievement.
pub fn new_manual_achievement(
    title: &str,
    description: &str,
    achieved_on: &str,
    category: AchievementCategory,
) -> Result<NewAchievement, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    if achieved_on.trim().is_empty() {
        return Err(AppError::Validation("achieved_on is required".to_string()));
    }
    let achieved_on = parse_flexible_date(achieved_on).ok_or_else(|| {
        AppError::Validation("achieved_on must be YYYY-MM-DD, YYYY-MM or YYYY".to_string())
    })?;

    Ok(NewAchievement {
        title: title.to_string(),
        description: description.trim().to_string(),
        achieved_on,
        category,
        provenance: Provenance::Manual,
    })
}

/// Asks the model for achievements in `text`. Entries without a title or with
/// an unreadable date are dropped; an empty result is an upstream failure.
pub async fn extract_achievements(
    llm: &dyn CompletionClient,
    text: &str,
    provenance: Provenance,
) -> Result<Vec<NewAchievement>, AppError> {
    let today = Utc::now().date_naive();
    let source: String = text.chars().take(MAX_SOURCE_CHARS).collect();
    let prompt = fill_template(
        ACHIEVEMENT_EXTRACT_PROMPT,
        &[
            ("text", &source),
            ("today", &today.format("%Y-%m-%d").to_string()),
        ],
    );
    let system = system_with(
        &system_with(ACHIEVEMENT_EXTRACT_SYSTEM, NO_FABRICATION),
        JSON_ONLY_SYSTEM,
    );

    let extracted: ExtractedAchievements = llm
        .call_json(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Achievement extraction failed: {e}")))?;

    let total = extracted.achievements.len();
    let achievements: Vec<NewAchievement> = extracted
        .achievements
        .into_iter()
        .filter_map(|a| normalize_extracted(a, provenance))
        .collect();

    if achievements.len() < total {
        warn!(
            "Dropped {} of {} extracted achievements with missing titles or dates",
            total - achievements.len(),
            total
        );
    }
    if achievements.is_empty() {
        return Err(AppError::Llm(
            "Model returned no usable achievements".to_string(),
        ));
    }

    info!("Extracted {} achievements", achievements.len());
    Ok(achievements)
}

fn normalize_extracted(raw: ExtractedAchievement, provenance: Provenance) -> Option<NewAchievement> {
    let title: String = raw.title.trim().chars().take(MAX_TITLE_CHARS).collect();
    if title.is_empty() {
        return None;
    }
    let achieved_on = parse_flexible_date(&raw.date)?;
    Some(NewAchievement {
        title,
        description: raw.description.trim().to_string(),
        achieved_on,
        category: AchievementCategory::parse_lenient(&raw.category),
        provenance,
    })
}
