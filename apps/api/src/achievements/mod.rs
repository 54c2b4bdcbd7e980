// Achievement log: manual entries plus AI extraction from free text or résumés.

pub mod extraction;
pub mod handlers;
pub mod prompts;
