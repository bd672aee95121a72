pub mod handlers;
pub mod skill_gap;
