// All LLM prompt constants for the Resume module.

pub const RESUME_PARSE_SYSTEM: &str = "You are a precise resume data extractor. \
    You convert raw resume text into structured JSON without rewording anything.";

/// Resume parse prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT: &str = r#"Extract the following resume into a structured JSON object.

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure; use null or [] for anything absent):
{
  "full_name": "string",
  "email": "string" | null,
  "phone": "string" | null,
  "location": "string" | null,
  "headline": "string" | null,
  "summary": "string" | null,
  "experience": [
    {"company": "string", "role": "string", "location": "string" | null,
     "start_date": "YYYY-MM" | null, "end_date": "YYYY-MM" | null, "current": false,
     "bullets": ["string"]}
  ],
  "education": [
    {"institution": "string", "degree": "string", "field": "string" | null,
     "start_date": "YYYY-MM" | null, "end_date": "YYYY-MM" | null, "gpa": "string" | null}
  ],
  "projects": [
    {"name": "string", "description": "string", "technologies": ["string"], "url": "string" | null}
  ],
  "skills": [{"name": "string", "level": "string" | null}],
  "languages": [{"name": "string", "proficiency": "string" | null}],
  "social_links": [{"platform": "LinkedIn" | "GitHub" | "Portfolio" | "string", "url": "string"}]
}

RULES:
1. Copy text verbatim; do not rephrase bullets or summaries
2. Keep entries in the order they appear in the resume
3. Set "current" to true only when the role is explicitly ongoing ("Present", "Current")
4. Split comma-separated skill lists into individual skills"#;

pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer who turns plain \
    descriptions into concise, achievement-oriented resume content.";

/// Section enhancement template. Replace: {section}, {target_role}, {content}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Rewrite the following {section} content for a resume{target_role}.

CONTENT:
{content}

GUIDELINES:
- Start each bullet or sentence with a strong action verb
- Keep every fact, number and technology that appears in the content
- Prefer results and impact over duties
- Keep it concise: no more than the original length plus 20%
- If the content is a list of bullets, return one bullet per line prefixed with "- "

Return only the rewritten content."#;

/// Summary template. Replace: {target_role}, {resume_text}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a professional summary for the top of this resume{target_role}.

RESUME:
{resume_text}

GUIDELINES:
- 3 to 4 sentences, written in the first person without using "I"
- Lead with years of experience and core specialty
- Mention two or three of the strongest, most relevant achievements or skills
- No buzzword padding ("synergy", "go-getter", "results-driven")

Return only the summary paragraph."#;
