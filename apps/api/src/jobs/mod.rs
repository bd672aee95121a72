// Job search: skill normalization, tiered aggregation, listing heuristics.

pub mod aggregator;
pub mod fallback;
pub mod handlers;
pub mod heuristics;
pub mod models;
pub mod normalize;
