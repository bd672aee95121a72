//! Axum route handlers for cover letters.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::cover_letter::generator::{generate_cover_letter, CoverLetterJob, LetterSource};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub job: Option<CoverLetterJob>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
    pub status: LetterSource,
}

/// POST /api/v1/cover-letter
///
/// Requires a session created by a resume upload.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let job = request
        .job
        .filter(|job| !job.is_empty())
        .ok_or_else(|| AppError::Validation("Job data is required".to_string()))?;
    let profile = state.sessions.require(&headers).await?;

    let letter = generate_cover_letter(state.llm.as_ref(), &profile.text, &job).await;
    Ok(Json(CoverLetterResponse {
        cover_letter: letter.text,
        status: letter.source,
    }))
}
