//! Text-passthrough résumé writing: section rewrites and professional summaries.

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, system_with, NO_FABRICATION, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{clean_text_reply, CompletionClient};
use crate::models::resume::ResumeDocument;
use crate::resume::prompts::{
    ENHANCE_PROMPT_TEMPLATE, RESUME_WRITER_SYSTEM, SUMMARY_PROMPT_TEMPLATE,
};

/// Sections the enhancer understands; anything else is rejected up front.
pub const ENHANCEABLE_SECTIONS: &[&str] = &[
    "summary",
    "experience",
    "project",
    "education",
    "skills",
    "achievement",
];

fn writer_system() -> String {
    system_with(
        &system_with(RESUME_WRITER_SYSTEM, NO_FABRICATION),
        PLAIN_TEXT_SYSTEM,
    )
}

fn target_role_clause(target_role: Option<&str>) -> String {
    target_role
        .map(|r| format!(" targeting a {r} role"))
        .unwrap_or_default()
}

pub fn validate_section(section: &str) -> Result<String, AppError> {
    let section = section.trim().to_lowercase();
    if section.is_empty() {
        return Err(AppError::Validation("section is required".to_string()));
    }
    if !ENHANCEABLE_SECTIONS.contains(&section.as_str()) {
        return Err(AppError::Validation(format!(
            "section must be one of: {}",
            ENHANCEABLE_SECTIONS.join(", ")
        )));
    }
    Ok(section)
}

pub async fn enhance_section(
    llm: &dyn CompletionClient,
    section: &str,
    content: &str,
    target_role: Option<&str>,
) -> Result<String, AppError> {
    let prompt = fill_template(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("section", section),
            ("target_role", &target_role_clause(target_role)),
            ("content", content),
        ],
    );

    let text = llm
        .call_text(&prompt, &writer_system())
        .await
        .map_err(|e| AppError::Llm(format!("Section enhancement failed: {e}")))?;
    non_empty(clean_text_reply(&text), "enhancement")
}

pub async fn generate_summary(
    llm: &dyn CompletionClient,
    resume: &ResumeDocument,
    target_role: Option<&str>,
) -> Result<String, AppError> {
    let prompt = fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("target_role", &target_role_clause(target_role)),
            ("resume_text", &render_resume_text(resume)),
        ],
    );

    let text = llm
        .call_text(&prompt, &writer_system())
        .await
        .map_err(|e| AppError::Llm(format!("Summary generation failed: {e}")))?;
    non_empty(clean_text_reply(&text), "summary")
}

fn non_empty(text: String, what: &str) -> Result<String, AppError> {
    if text.is_empty() {
        return Err(AppError::Llm(format!("Model returned an empty {what}")));
    }
    Ok(text)
}

/// Plain-text rendering of a résumé for prompt context.
pub fn render_resume_text(doc: &ResumeDocument) -> String {
    let mut lines: Vec<String> = vec![doc.full_name.clone()];
    lines.extend(doc.headline.clone());
    if let Some(summary) = &doc.summary {
        lines.push(format!("\nSUMMARY\n{summary}"));
    }

    if !doc.experience.is_empty() {
        lines.push("\nEXPERIENCE".to_string());
        for e in &doc.experience {
            let end = if e.current {
                "Present"
            } else {
                e.end_date.as_deref().unwrap_or_default()
            };
            lines.push(format!(
                "{} at {} ({} - {})",
                e.role,
                e.company,
                e.start_date.as_deref().unwrap_or("?"),
                end
            ));
            lines.extend(e.bullets.iter().map(|b| format!("- {b}")));
        }
    }

    if !doc.education.is_empty() {
        lines.push("\nEDUCATION".to_string());
        for e in &doc.education {
            let field = e.field.as_deref().map(|f| format!(" in {f}")).unwrap_or_default();
            lines.push(format!("{}{}, {}", e.degree, field, e.institution));
        }
    }

    if !doc.projects.is_empty() {
        lines.push("\nPROJECTS".to_string());
        for p in &doc.projects {
            lines.push(format!("{}: {}", p.name, p.description));
            if !p.technologies.is_empty() {
                lines.push(format!("  Tech: {}", p.technologies.join(", ")));
            }
        }
    }

    if !doc.skills.is_empty() {
        let skills: Vec<_> = doc.skills.iter().map(|s| s.name.as_str()).collect();
        lines.push(format!("\nSKILLS\n{}", skills.join(", ")));
    }

    if !doc.languages.is_empty() {
        let languages: Vec<_> = doc
            .languages
            .iter()
            .map(|l| match &l.proficiency {
                Some(p) => format!("{} ({p})", l.name),
                None => l.name.clone(),
            })
            .collect();
        lines.push(format!("\nLANGUAGES\n{}", languages.join(", ")));
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationItem, ExperienceItem, LanguageItem, SkillItem};

    fn sample() -> ResumeDocument {
        ResumeDocument {
            full_name: "Jane Doe".into(),
            headline: Some("Backend Engineer".into()),
            experience: vec![ExperienceItem {
                company: "Acme".into(),
                role: "Engineer".into(),
                start_date: Some("2021-03".into()),
                current: true,
                bullets: vec!["Cut deploy time by 40%".into()],
                ..Default::default()
            }],
            education: vec![EducationItem {
                institution: "MIT".into(),
                degree: "BSc".into(),
                field: Some("Computer Science".into()),
                ..Default::default()
            }],
            skills: vec![
                SkillItem {
                    name: "Rust".into(),
                    level: None,
                },
                SkillItem {
                    name: "Postgres".into(),
                    level: Some("expert".into()),
                },
            ],
            languages: vec![LanguageItem {
                name: "French".into(),
                proficiency: Some("B2".into()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_resume_text_includes_sections() {
        let text = render_resume_text(&sample());
        assert!(text.starts_with("Jane Doe\nBackend Engineer"));
        assert!(text.contains("Engineer at Acme (2021-03 - Present)"));
        assert!(text.contains("- Cut deploy time by 40%"));
        assert!(text.contains("BSc in Computer Science, MIT"));
        assert!(text.contains("Rust, Postgres"));
        assert!(text.contains("French (B2)"));
        assert!(!text.contains("PROJECTS"));
    }

    #[test]
    fn test_validate_section_normalizes_case() {
        assert_eq!(validate_section(" Experience ").unwrap(), "experience");
        assert!(validate_section("hobbies").is_err());
        assert!(validate_section("").is_err());
    }

    #[test]
    fn test_target_role_clause() {
        assert_eq!(target_role_clause(Some("SRE")), " targeting a SRE role");
        assert_eq!(target_role_clause(None), "");
    }
}
