//! Axum route handlers for interview preparation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::research::researcher::{research_company, CompanyResearch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub research: CompanyResearch,
}

/// POST /api/v1/research
pub async fn handle_research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, AppError> {
    let company_name = request.company_name.trim();
    let job_title = request.job_title.trim();
    if company_name.is_empty() || job_title.is_empty() {
        return Err(AppError::Validation(
            "Company name and job title are required".to_string(),
        ));
    }

    let research = research_company(
        state.search.as_ref(),
        state.llm.as_ref(),
        company_name,
        job_title,
    )
    .await;
    Ok(Json(ResearchResponse { research }))
}
