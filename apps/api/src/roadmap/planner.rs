//! Roadmap planning: prompt assembly and normalization of the model's phase list.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionClient;
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 12;
pub const MAX_TIMEFRAME_MONTHS: u32 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRoadmap {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub total_duration: String,
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_resource_kind")]
    pub kind: String,
    pub url: Option<String>,
}

fn default_resource_kind() -> String {
    "article".to_string()
}

/// Validated roadmap inputs.
#[derive(Debug, Clone)]
pub struct RoadmapInput {
    pub current_role: String,
    pub target_role: String,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub timeframe_months: u32,
}

pub fn build_roadmap_prompt(input: &RoadmapInput) -> String {
    let skills = if input.skills.is_empty() {
        "not specified".to_string()
    } else {
        input.skills.join(", ")
    };
    let experience = match input.experience_years {
        Some(1) => "1 year".to_string(),
        Some(years) => format!("{years} years"),
        None => "not specified".to_string(),
    };

    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("current_role", &input.current_role),
            ("target_role", &input.target_role),
            ("skills", &skills),
            ("experience", &experience),
            ("timeframe_months", &input.timeframe_months.to_string()),
        ],
    )
}

/// Orders phases by the model's `order` (stable for ties), renumbers them 1..=n,
/// drops untitled phases and blank steps.
pub fn normalize_roadmap(mut roadmap: CareerRoadmap) -> CareerRoadmap {
    roadmap.phases.retain(|p| !p.title.trim().is_empty());
    roadmap.phases.sort_by_key(|p| p.order);

    for (index, phase) in roadmap.phases.iter_mut().enumerate() {
        phase.order = index as u32 + 1;
        phase.title = phase.title.trim().to_string();
        phase.steps = phase
            .steps
            .drain(..)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        phase.resources.retain(|r| !r.title.trim().is_empty());
        for resource in &mut phase.resources {
            resource.url = resource
                .url
                .take()
                .filter(|u| u.starts_with("http://") || u.starts_with("https://"));
        }
    }

    roadmap
}

pub async fn generate_roadmap(
    llm: &dyn CompletionClient,
    input: &RoadmapInput,
) -> Result<CareerRoadmap, AppError> {
    let prompt = build_roadmap_prompt(input);
    let roadmap: CareerRoadmap = llm
        .call_json(&prompt, &system_with(ROADMAP_SYSTEM, JSON_ONLY_SYSTEM))
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    let roadmap = normalize_roadmap(roadmap);
    if roadmap.phases.is_empty() {
        return Err(AppError::Llm("Roadmap contained no phases".to_string()));
    }

    info!(
        "Generated roadmap '{}' with {} phases",
        roadmap.title,
        roadmap.phases.len()
    );
    Ok(roadmap)
}
