use serde::{Deserialize, Serialize};

use crate::career_tools::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, NO_FABRICATION, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{clean_text_reply, CompletionClient};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterTone {
    #[default]
    Professional,
    Enthusiastic,
    Concise,
}

impl LetterTone {
    fn instruction(&self) -> &'static str {
        match self {
            LetterTone::Professional => "Professional and confident, never stiff",
            LetterTone::Enthusiastic => {
                "Warm and energetic; show genuine interest in the company's mission"
            }
            LetterTone::Concise => "Direct and compact; no sentence that does not earn its place",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoverLetterInput {
    pub resume_text: String,
    pub job_description: String,
    pub company_name: Option<String>,
    pub tone: LetterTone,
}

pub fn build_cover_letter_prompt(input: &CoverLetterInput) -> String {
    let company_clause = input
        .company_name
        .as_deref()
        .map(|c| format!(" at {c}"))
        .unwrap_or_default();

    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("company_clause", &company_clause),
            ("tone_instruction", input.tone.instruction()),
            ("job_description", &input.job_description),
            ("resume_text", &input.resume_text),
        ],
    )
}

pub async fn write_cover_letter(
    llm: &dyn CompletionClient,
    input: &CoverLetterInput,
) -> Result<String, AppError> {
    let system = system_with(
        &system_with(COVER_LETTER_SYSTEM, NO_FABRICATION),
        PLAIN_TEXT_SYSTEM,
    );
    let text = llm
        .call_text(&build_cover_letter_prompt(input), &system)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    let letter = clean_text_reply(&text);
    if letter.is_empty() {
        return Err(AppError::Llm("Model returned an empty cover letter".to_string()));
    }
    Ok(letter)
}
