//! Axum route handlers for skill gap analysis.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::skill_gap::{analyze_skill_gap, SkillGapReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub analysis: SkillGapReport,
}

/// POST /api/v1/skills/gap
///
/// Compares the session's extracted skills with a job description.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let profile = state.sessions.require(&headers).await?;
    let analysis = analyze_skill_gap(&profile.skills, &request.job_description);
    Ok(Json(SkillGapResponse { analysis }))
}
