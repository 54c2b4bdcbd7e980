// ATS analysis: scores a résumé for applicant-tracking compliance via the LLM.
// All LLM calls go through llm_client.

pub mod analysis;
pub mod handlers;
pub mod prompts;
