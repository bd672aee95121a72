pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_skill_gap;
use crate::courses::handlers::handle_courses;
use crate::cover_letter::handlers::handle_cover_letter;
use crate::jobs::handlers::handle_search_jobs;
use crate::research::handlers::handle_research;
use crate::resume::handlers::handle_upload;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            post(handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/jobs/search", post(handle_search_jobs))
        .route("/api/v1/cover-letter", post(handle_cover_letter))
        .route("/api/v1/skills/gap", post(handle_skill_gap))
        .route("/api/v1/courses", post(handle_courses))
        .route("/api/v1/research", post(handle_research))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};
    use crate::llm_client::TextGenerator;
    use crate::resume::build_profile;
    use crate::resume::session::{SessionStore, SESSION_HEADER};
    use crate::search_client::testing::FakeSearch;
    use crate::video_client::testing::FakeVideos;

    fn state_with(llm: Arc<dyn TextGenerator>) -> AppState {
        AppState {
            config: Config::for_tests(),
            llm,
            search: Arc::new(FakeSearch::down()),
            videos: Arc::new(FakeVideos::up()),
            sessions: SessionStore::new(Duration::minutes(120)),
        }
    }

    fn test_state() -> AppState {
        state_with(Arc::new(FailingGenerator))
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json_with_session(uri: &str, session: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(SESSION_HEADER, session)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_upload(filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "jobscout-boundary";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post("/api/v1/resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn seed_session(state: &AppState, text: &str) -> String {
        let profile = build_profile(text.to_string(), "resume.pdf".to_string());
        state.sessions.create(profile).await.to_string()
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(test_state(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobscout");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let (status, body) = send(test_state(), multipart_upload("resume.docx", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Invalid file type. Please upload a PDF."
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_filename() {
        let (status, body) = send(test_state(), multipart_upload("", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file selected");
    }

    #[tokio::test]
    async fn test_unreadable_pdf_still_opens_session() {
        let state = test_state();
        let (status, body) =
            send(state.clone(), multipart_upload("cv.pdf", b"not really a pdf")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.pdf");
        assert_eq!(body["skills"], json!(["Software Engineer"]));
        assert_eq!(body["contact_info"]["name"], "Candidate");
        assert_eq!(state.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_job_search_falls_back_when_search_is_down() {
        let request = post_json("/api/v1/jobs/search", json!({"skills": ["Python"]}));
        let (status, body) = send(test_state(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["jobs"].as_array().unwrap().len(), 8);
        assert_eq!(body["tiers"][0]["status"]["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_job_search_rejects_out_of_range_limit() {
        let request = post_json("/api/v1/jobs/search", json!({"skills": [], "limit": 0}));
        let (status, _) = send(test_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cover_letter_requires_job() {
        let request = post_json("/api/v1/cover-letter", json!({}));
        let (status, body) = send(test_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Job data is required");
    }

    #[tokio::test]
    async fn test_cover_letter_without_session_is_expired() {
        let request = post_json("/api/v1/cover-letter", json!({"job": {"title": "SRE"}}));
        let (status, body) = send(test_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Session expired. Please upload resume again."
        );
    }

    #[tokio::test]
    async fn test_cover_letter_with_session_uses_generator() {
        let state = state_with(Arc::new(CannedGenerator("Dear Acme,".to_string())));
        let session = seed_session(&state, "Jane Doe\njane@example.com\nPython").await;
        let request = post_json_with_session(
            "/api/v1/cover-letter",
            &session,
            json!({"job": {"title": "SRE", "company": "Acme"}}),
        );
        let (status, body) = send(state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cover_letter"], "Dear Acme,");
        assert_eq!(body["status"], "generated");
    }

    #[tokio::test]
    async fn test_skill_gap_uses_session_skills() {
        let state = test_state();
        let session = seed_session(&state, "Experienced Python developer").await;
        let request = post_json_with_session(
            "/api/v1/skills/gap",
            &session,
            json!({"job_description": "Looking for Python and Kubernetes expert"}),
        );
        let (status, body) = send(state, request).await;

        assert_eq!(status, StatusCode::OK);
        let missing = body["analysis"]["missing_skills"].as_array().unwrap();
        assert!(missing.contains(&json!("Kubernetes")));
        assert!(!missing.contains(&json!("Python")));
    }

    #[tokio::test]
    async fn test_skill_gap_with_expired_session() {
        let state = test_state();
        let mut profile = build_profile("Python".to_string(), "old.pdf".to_string());
        profile.uploaded_at = Utc::now() - Duration::hours(3);
        let session = state.sessions.create(profile).await.to_string();

        let request = post_json_with_session(
            "/api/v1/skills/gap",
            &session,
            json!({"job_description": "Python"}),
        );
        let (status, _) = send(state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_courses_limited_to_five_skills() {
        let request = post_json(
            "/api/v1/courses",
            json!({"skills": ["Python", "Docker", "React", "SQL", "Git", "AWS"]}),
        );
        let (status, body) = send(test_state(), request).await;

        assert_eq!(status, StatusCode::OK);
        let courses = body["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 5);
        assert_eq!(courses[0]["youtube"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_research_rejects_blank_inputs() {
        let request = post_json(
            "/api/v1/research",
            json!({"company_name": "  ", "job_title": "SRE"}),
        );
        let (status, _) = send(test_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_research_degrades_to_template() {
        let request = post_json(
            "/api/v1/research",
            json!({"company_name": "Acme", "job_title": "SRE"}),
        );
        let (status, body) = send(test_state(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["research"]["company_name"], "Acme");
        assert_eq!(body["research"]["brief_source"], "template");
        assert!(body["research"]["interview_questions"].as_array().unwrap().is_empty());
    }
}
