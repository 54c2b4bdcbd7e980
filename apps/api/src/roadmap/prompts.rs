// All LLM prompt constants for the Roadmap module.

pub const ROADMAP_SYSTEM: &str = "You are a senior career coach who builds realistic, \
    step-by-step transition plans. Plans are specific to the person's current skills \
    and name concrete, well-known learning resources.";

/// Roadmap prompt template.
/// Replace: {current_role}, {target_role}, {skills}, {experience}, {timeframe_months}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a career roadmap for the following person.

CURRENT ROLE: {current_role}
TARGET ROLE: {target_role}
CURRENT SKILLS: {skills}
EXPERIENCE: {experience}
TIMEFRAME: {timeframe_months} months

Return a JSON object with this EXACT schema:
{
  "title": "From <current> to <target>",
  "summary": "Two or three sentences describing the overall strategy",
  "total_duration": "e.g. 12 months",
  "phases": [
    {
      "order": 1,
      "title": "Phase title",
      "duration": "e.g. Months 1-3",
      "goal": "What this phase achieves",
      "steps": ["Concrete action"],
      "resources": [
        {"title": "Resource name", "kind": "course" | "book" | "certification" | "community" | "project" | "article", "url": "https://..." | null}
      ]
    }
  ]
}

RULES:
1. Between 3 and 6 phases that together fit inside the timeframe
2. 3 to 6 steps per phase; each step starts with a verb
3. Build on the listed skills; do not schedule time to learn what they already know
4. Only include a url when you are confident it exists; otherwise use null"#;
