//! Résumé import: raw text (usually from a PDF) to a structured `ResumeDocument`.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionClient;
use crate::models::resume::ResumeDocument;
use crate::resume::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};

/// Cap on résumé text sent to the model; long PDFs are mostly boilerplate past this.
const MAX_RESUME_CHARS: usize = 20_000;

pub async fn parse_resume_text(
    llm: &dyn CompletionClient,
    resume_text: &str,
) -> Result<ResumeDocument, AppError> {
    let prompt = fill_template(
        RESUME_PARSE_PROMPT,
        &[("resume_text", truncate_chars(resume_text, MAX_RESUME_CHARS))],
    );
    let document: ResumeDocument = llm
        .call_json(&prompt, &system_with(RESUME_PARSE_SYSTEM, JSON_ONLY_SYSTEM))
        .await
        .map_err(|e| AppError::Llm(format!("Resume parsing failed: {e}")))?;

    let document = tidy_document(document);
    info!(
        "Parsed resume: {} experience, {} education, {} skills",
        document.experience.len(),
        document.education.len(),
        document.skills.len()
    );
    Ok(document)
}

/// Drops entries the model emitted with no identifying text.
pub fn tidy_document(mut doc: ResumeDocument) -> ResumeDocument {
    doc.full_name = doc.full_name.trim().to_string();
    doc.experience
        .retain(|e| !e.company.trim().is_empty() || !e.role.trim().is_empty());
    for entry in &mut doc.experience {
        entry.bullets.retain(|b| !b.trim().is_empty());
    }
    doc.education.retain(|e| !e.institution.trim().is_empty());
    doc.projects.retain(|p| !p.name.trim().is_empty());
    doc.skills.retain(|s| !s.name.trim().is_empty());
    doc.languages.retain(|l| !l.name.trim().is_empty());
    doc.social_links.retain(|l| !l.url.trim().is_empty());
    doc
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceItem, SkillItem};

    #[test]
    fn test_tidy_document_drops_empty_entries() {
        let doc = ResumeDocument {
            full_name: "  Jane Doe ".into(),
            experience: vec![
                ExperienceItem {
                    company: "Acme".into(),
                    role: "Engineer".into(),
                    bullets: vec!["Shipped v2".into(), " ".into()],
                    ..Default::default()
                },
                ExperienceItem::default(),
            ],
            skills: vec![
                SkillItem {
                    name: "Rust".into(),
                    level: None,
                },
                SkillItem::default(),
            ],
            ..Default::default()
        };
        let doc = tidy_document(doc);
        assert_eq!(doc.full_name, "Jane Doe");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0].bullets, vec!["Shipped v2"]);
        assert_eq!(doc.skills.len(), 1);
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("résumé", 3), "rés");
        assert_eq!(truncate_chars("cv", 10), "cv");
    }

    #[test]
    fn test_partial_document_deserializes() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"full_name": "Sam", "skills": [{"name": "Go"}]}"#).unwrap();
        assert_eq!(doc.full_name, "Sam");
        assert!(doc.experience.is_empty());
        assert_eq!(doc.skills[0].name, "Go");
    }
}
