// All LLM prompt constants for the ATS module.

/// System prompt for ATS analysis.
pub const ATS_SYSTEM: &str = "You are an experienced technical recruiter and an expert in \
    Applicant Tracking Systems (ATS). You evaluate resumes the way ATS parsers and \
    keyword filters do, and you give concrete, actionable feedback.";

/// ATS analysis prompt template. Replace `{resume_text}` and `{job_context}` before sending.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume for ATS compatibility.

{job_context}

RESUME:
{resume_text}

Return a JSON object with this EXACT schema:
{
  "overall_score": 0-100,
  "keyword_score": 0-100,
  "format_score": 0-100,
  "content_score": 0-100,
  "impact_score": 0-100,
  "summary": "Two or three sentences on how this resume will fare in an ATS",
  "strengths": ["string"],
  "improvements": ["Specific, actionable change"],
  "missing_keywords": ["keyword"]
}

SCORING GUIDE:
- keyword_score: coverage of role-relevant keywords (against the job description when one is given)
- format_score: parseability: standard section headings, no tables/columns/graphics, consistent dates
- content_score: completeness and relevance of experience, education and skills
- impact_score: quantified achievements, strong action verbs, measurable outcomes
- overall_score: your holistic judgement, not a plain average

Return at most 6 strengths, 8 improvements and 15 missing keywords."#;

/// Inserted as `{job_context}` when the caller supplied a job description.
pub const JOB_CONTEXT_TEMPLATE: &str = "Score keyword coverage against this JOB DESCRIPTION:\n{job_description}";

/// Inserted as `{job_context}` when no job description was supplied.
pub const NO_JOB_CONTEXT: &str = "No job description was provided. Score keyword coverage against \
    what is typical for the role the resume targets.";
