// All LLM prompt constants for the Achievements module.

pub const ACHIEVEMENT_EXTRACT_SYSTEM: &str = "You are a meticulous career archivist. \
    You identify discrete professional achievements in text and record them faithfully.";

/// Achievement extraction template. Replace `{text}` and `{today}` before sending.
pub const ACHIEVEMENT_EXTRACT_PROMPT: &str = r#"Identify the distinct professional achievements in the text below.

TEXT:
{text}

Return a JSON object with this EXACT schema:
{
  "achievements": [
    {
      "title": "Short headline, max 80 characters",
      "description": "One or two sentences with the concrete outcome",
      "date": "YYYY-MM-DD" | "YYYY-MM" | "YYYY",
      "category": "certification" | "project" | "award" | "promotion" | "publication" | "skill" | "other"
    }
  ]
}

RULES:
1. One entry per achievement; do not merge unrelated accomplishments
2. Keep every number, percentage and name exactly as written
3. Use the most precise date the text supports; if none is given, use {today}
4. Responsibilities are not achievements; skip duties without an outcome"#;
