// Career tools: cover letters and interview preparation.

pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod prompts;
