// Course recommendations: live video search plus a curated catalog.

pub mod catalog;
pub mod handlers;
pub mod recommender;

use serde::{Deserialize, Serialize};

/// A single learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLink {
    pub title: String,
    pub url: String,
    pub platform: String,
}
