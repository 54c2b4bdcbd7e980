use serde::{Deserialize, Serialize};

use crate::career_tools::prompts::{INTERVIEW_PROMPT_TEMPLATE, INTERVIEW_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionClient;

pub const DEFAULT_QUESTION_COUNT: usize = 8;
pub const MIN_QUESTION_COUNT: usize = 3;
pub const MAX_QUESTION_COUNT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub guidance: String,
}

fn default_category() -> String {
    "role_specific".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    #[serde(default)]
    pub questions: Vec<InterviewQuestion>,
}

/// Missing count means the default; anything else, negatives included, is
/// clamped into range.
pub fn question_count(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_QUESTION_COUNT,
        Some(n) => n.clamp(MIN_QUESTION_COUNT as i64, MAX_QUESTION_COUNT as i64) as usize,
    }
}

pub async fn prepare_questions(
    llm: &dyn CompletionClient,
    role: &str,
    job_description: Option<&str>,
    count: usize,
) -> Result<InterviewQuestionSet, AppError> {
    let job_context = match job_description {
        Some(jd) => format!("Base the questions on this JOB DESCRIPTION:\n{jd}"),
        None => "No job description was provided; use what is typical for the role.".to_string(),
    };
    let prompt = fill_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("role", role),
            ("count", &count.to_string()),
            ("job_context", &job_context),
        ],
    );

    let mut set: InterviewQuestionSet = llm
        .call_json(&prompt, &system_with(INTERVIEW_SYSTEM, JSON_ONLY_SYSTEM))
        .await
        .map_err(|e| AppError::Llm(format!("Interview question generation failed: {e}")))?;

    set.questions.retain(|q| !q.question.trim().is_empty());
    set.questions.truncate(count);
    if set.questions.is_empty() {
        return Err(AppError::Llm("Model returned no interview questions".to_string()));
    }
    Ok(set)
}
