// Cover letters generated from the session's resume and a chosen job listing.

pub mod generator;
pub mod handlers;
pub mod prompts;
