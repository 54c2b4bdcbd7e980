// Profile and onboarding state.

pub mod handlers;
pub mod onboarding;
