//! Axum route handlers for job search.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::aggregator::{search_jobs, JobSearchOutcome, DEFAULT_LIMIT, DEFAULT_LOCATION};
use crate::jobs::normalize::{normalize_skills, SkillsInput};
use crate::state::AppState;

/// Largest `limit` a caller may ask for.
pub const MAX_LIMIT: usize = 25;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub skills: SkillsInput,
    pub location: Option<String>,
    pub limit: Option<usize>,
}

/// POST /api/v1/jobs/search
///
/// Accepts skills as a flat list or a category-keyed mapping. Always answers
/// with at least one listing; `source` and `tiers` say where they came from.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchOutcome>, AppError> {
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }
    let location = request
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOCATION);

    let skills = normalize_skills(&request.skills);
    tracing::debug!("Normalized skills: {skills:?}, location: {location}");

    let outcome = search_jobs(state.search.as_ref(), &skills, location, limit).await;
    Ok(Json(outcome))
}
