// Career roadmap: phased plan from a current role to a target role.

pub mod handlers;
pub mod planner;
pub mod prompts;
