//! Axum route handlers for course recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::courses::recommender::{recommend_courses, CourseEntry};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoursesRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub courses: Vec<CourseEntry>,
}

/// POST /api/v1/courses
pub async fn handle_courses(
    State(state): State<AppState>,
    Json(request): Json<CoursesRequest>,
) -> Result<Json<CoursesResponse>, AppError> {
    let courses = recommend_courses(state.videos.as_ref(), &request.skills).await;
    Ok(Json(CoursesResponse { courses }))
}
