//! Axum route handlers for resume upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::build_profile;
use crate::resume::contact::ContactInfo;
use crate::resume::pdf::{extract_pdf_text, is_pdf_filename, sanitize_filename};
use crate::state::AppState;

/// Multipart field that carries the PDF.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: Uuid,
    pub filename: String,
    pub skills: Vec<String>,
    pub contact_info: ContactInfo,
}

/// POST /api/v1/resume
///
/// Accepts a PDF in the `resume` multipart field, extracts text, skills and
/// contact details, and opens a session holding the derived profile.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if filename.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !is_pdf_filename(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload a PDF.".to_string(),
        ));
    }

    let filename = sanitize_filename(&filename);
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .map_err(anyhow::Error::from)?;
    info!("Text extracted from {filename}: {} chars", text.len());

    let profile = build_profile(text, filename);
    info!("Skills found: {:?}", profile.skills);

    let filename = profile.filename.clone();
    let skills = profile.skills.clone();
    let contact_info = profile.contact_info.clone();
    let session_id = state.sessions.create(profile).await;
    info!("Session {session_id} created");

    Ok(Json(UploadResponse {
        session_id,
        filename,
        skills,
        contact_info,
    }))
}
