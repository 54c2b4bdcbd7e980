// Résumé builder: PDF import, section rewriting, summaries, and the saved document.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod writer;
