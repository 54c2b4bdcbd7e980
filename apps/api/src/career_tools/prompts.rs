// All LLM prompt constants for the career tools.

pub const COVER_LETTER_SYSTEM: &str = "You are an expert career writer who drafts \
    tailored, specific cover letters that connect a candidate's real experience to a role.";

/// Cover letter template.
/// Replace: {company_clause}, {tone_instruction}, {job_description}, {resume_text}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter for the job below{company_clause}.

JOB DESCRIPTION:
{job_description}

CANDIDATE RESUME:
{resume_text}

GUIDELINES:
- {tone_instruction}
- 250 to 400 words, 3 or 4 paragraphs
- Open with the role and one concrete reason the candidate fits
- Reference two or three specific achievements from the resume that match the job
- Close with a short call to action
- Use "Dear Hiring Manager," unless a contact name appears in the job description

Return only the letter text."#;

pub const INTERVIEW_SYSTEM: &str = "You are a hiring manager who prepares candidates \
    for interviews with realistic questions and practical answer guidance.";

/// Interview questions template. Replace: {role}, {count}, {job_context}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Prepare {count} interview questions for a {role} candidate.

{job_context}

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "question": "string",
      "category": "behavioral" | "technical" | "situational" | "role_specific",
      "guidance": "What a strong answer covers, in one or two sentences"
    }
  ]
}

Mix categories; at least one behavioral and one technical question."#;
