//! ATS analysis: five clamped scores plus free-text feedback.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, JOB_CONTEXT_TEMPLATE, NO_JOB_CONTEXT,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionClient;

/// Résumé text shorter than this (ignoring whitespace) cannot be scored meaningfully.
pub const MIN_RESUME_CHARS: usize = 50;

const MAX_STRENGTHS: usize = 6;
const MAX_IMPROVEMENTS: usize = 8;
const MAX_MISSING_KEYWORDS: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtsAnalysis {
    pub overall_score: u8,
    pub keyword_score: u8,
    pub format_score: u8,
    pub content_score: u8,
    pub impact_score: u8,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// What the model actually returns: scores may be fractional or out of range.
#[derive(Debug, Deserialize)]
struct RawAtsAnalysis {
    overall_score: f64,
    keyword_score: f64,
    format_score: f64,
    content_score: f64,
    impact_score: f64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default)]
    missing_keywords: Vec<String>,
}

impl From<RawAtsAnalysis> for AtsAnalysis {
    fn from(raw: RawAtsAnalysis) -> Self {
        AtsAnalysis {
            overall_score: clamp_score(raw.overall_score),
            keyword_score: clamp_score(raw.keyword_score),
            format_score: clamp_score(raw.format_score),
            content_score: clamp_score(raw.content_score),
            impact_score: clamp_score(raw.impact_score),
            summary: raw.summary.trim().to_string(),
            strengths: tidy_list(raw.strengths, MAX_STRENGTHS),
            improvements: tidy_list(raw.improvements, MAX_IMPROVEMENTS),
            missing_keywords: tidy_list(raw.missing_keywords, MAX_MISSING_KEYWORDS),
        }
    }
}

/// Rounds to the nearest integer and clamps into 0..=100. NaN scores as 0.
pub fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}

fn tidy_list(items: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .take(max)
        .collect()
}

pub fn validate_resume_text(resume_text: &str) -> Result<(), AppError> {
    let meaningful = resume_text.chars().filter(|c| !c.is_whitespace()).count();
    if meaningful == 0 {
        return Err(AppError::Validation("resume_text is required".to_string()));
    }
    if meaningful < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "resume_text is too short to analyze (minimum {MIN_RESUME_CHARS} characters)"
        )));
    }
    Ok(())
}

pub fn build_ats_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_context = match job_description {
        Some(jd) => fill_template(JOB_CONTEXT_TEMPLATE, &[("job_description", jd)]),
        None => NO_JOB_CONTEXT.to_string(),
    };
    fill_template(
        ATS_PROMPT_TEMPLATE,
        &[("job_context", &job_context), ("resume_text", resume_text)],
    )
}

/// Scores the résumé via the LLM and normalizes the result.
pub async fn analyze_resume(
    llm: &dyn CompletionClient,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<AtsAnalysis, AppError> {
    validate_resume_text(resume_text)?;

    let prompt = build_ats_prompt(resume_text, job_description);
    let raw: RawAtsAnalysis = llm
        .call_json(&prompt, &system_with(ATS_SYSTEM, JSON_ONLY_SYSTEM))
        .await
        .map_err(|e| AppError::Llm(format!("ATS analysis failed: {e}")))?;

    let analysis = AtsAnalysis::from(raw);
    info!(
        "ATS analysis complete: overall={} keyword={} format={}",
        analysis.overall_score, analysis.keyword_score, analysis.format_score
    );
    Ok(analysis)
}
