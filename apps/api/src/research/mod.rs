// Interview preparation: company research, interview-question search, generated brief.

pub mod brief;
pub mod handlers;
pub mod prompts;
pub mod researcher;
