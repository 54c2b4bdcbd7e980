//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::extract::{optional, required, ApiJson};
use crate::models::resume::{ResumeDocument, ResumeRow};
use crate::resume::parser::parse_resume_text;
use crate::resume::writer::{enhance_section, generate_summary, validate_section};
use crate::state::AppState;
use crate::uploads::{extract_pdf_text, read_pdf_upload, store_original};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub resume: ResumeDocument,
    pub file_key: String,
    pub extracted_chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub content: String,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub resume: Option<ResumeDocument>,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/parse
///
/// Multipart `file` (PDF). Extracts its text, returns the structured résumé for
/// the builder to prefill, and keeps the original once parsing has succeeded.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    user: SessionUser,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let upload = read_pdf_upload(multipart, state.max_upload_bytes).await?;
    let text = extract_pdf_text(upload.bytes.clone()).await?;
    let extracted_chars = text.chars().count();

    let resume = parse_resume_text(state.llm.as_ref(), &text).await?;
    let file_key = store_original(state.files.as_ref(), user.user_id, &upload).await?;

    Ok(Json(ParseResumeResponse {
        resume,
        file_key,
        extracted_chars,
    }))
}

/// POST /api/v1/resume/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    _user: SessionUser,
    ApiJson(request): ApiJson<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let section = validate_section(&request.section)?;
    let content = required(&request.content, "content")?;
    let target_role = optional(request.target_role);

    let enhanced = enhance_section(
        state.llm.as_ref(),
        &section,
        &content,
        target_role.as_deref(),
    )
    .await?;
    Ok(Json(EnhanceResponse { enhanced }))
}

/// POST /api/v1/resume/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    _user: SessionUser,
    ApiJson(request): ApiJson<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let resume = request
        .resume
        .ok_or_else(|| AppError::Validation("resume is required".to_string()))?;
    if resume.experience.is_empty() && resume.education.is_empty() && resume.skills.is_empty() {
        return Err(AppError::Validation(
            "resume needs experience, education or skills to summarize".to_string(),
        ));
    }
    let target_role = optional(request.target_role);

    let summary = generate_summary(state.llm.as_ref(), &resume, target_role.as_deref()).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ResumeDocument>, AppError> {
    let row = state
        .store
        .get_resume(user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No saved resume".to_string()))?;
    let document = serde_json::from_value(row.document)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored resume is unreadable: {e}")))?;
    Ok(Json(document))
}

/// PUT /api/v1/resume
///
/// Stores the builder's document verbatim; one résumé per user.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    user: SessionUser,
    ApiJson(document): ApiJson<ResumeDocument>,
) -> Result<Json<ResumeRow>, AppError> {
    required(&document.full_name, "full_name")?;
    let value = serde_json::to_value(&document)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

    let row = state.store.save_resume(user.user_id, &value).await?;
    tracing::info!("Saved resume for user {}", user.user_id);
    Ok(Json(row))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::test_support::{
        authed_request, error_code, json_request, multipart_request, sample_pdf, MockLlm, TestApp,
    };

    const PARSED_RESUME: &str = r#"{
      "full_name": "Jane Doe",
      "headline": "Senior Backend Engineer",
      "experience": [{"company": "Acme", "role": "Engineer", "bullets": ["Shipped v2"]}],
      "skills": [{"name": "Rust"}]
    }"#;

    #[tokio::test]
    async fn test_enhance_passes_text_through() {
        let app = TestApp::new(MockLlm::replying(
            "- Led migration of 12 services to Kubernetes, cutting infra cost 30%",
        ));
        let (status, body) = app
            .send(json_request(
                Method::POST,
                "/api/v1/resume/enhance",
                json!({"section": "experience", "content": "moved services to k8s, saved 30%", "target_role": "SRE"}),
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["enhanced"],
            "- Led migration of 12 services to Kubernetes, cutting infra cost 30%"
        );
        let prompt = &app.llm.prompts()[0];
        assert!(prompt.contains("moved services to k8s"));
        assert!(prompt.contains("targeting a SRE role"));
    }

    #[tokio::test]
    async fn test_enhance_missing_content_is_400() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let (status, body) = app
            .send(json_request(
                Method::POST,
                "/api/v1/resume/enhance",
                json!({"section": "summary"}),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "content is required");
    }

    #[tokio::test]
    async fn test_enhance_unknown_section_is_400() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let (status, _) = app
            .send(json_request(
                Method::POST,
                "/api/v1/resume/enhance",
                json!({"section": "hobbies", "content": "chess"}),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enhance_upstream_failure_is_500() {
        let app = TestApp::new(MockLlm::failing());
        let (status, body) = app
            .send(json_request(
                Method::POST,
                "/api/v1/resume/enhance",
                json!({"section": "summary", "content": "I write code"}),
            ))
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_code(&body), "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_summary_renders_resume_into_prompt() {
        let app = TestApp::new(MockLlm::replying(
            "\"Backend engineer with 6 years of Rust and Postgres experience.\"",
        ));
        let (status, body) = app
            .send(json_request(
                Method::POST,
                "/api/v1/resume/summary",
                json!({"resume": {"full_name": "Jane Doe", "skills": [{"name": "Rust"}]}}),
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["summary"],
            "Backend engineer with 6 years of Rust and Postgres experience."
        );
        assert!(app.llm.prompts()[0].contains("SKILLS\nRust"));
    }

    #[tokio::test]
    async fn test_summary_missing_resume_is_400() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let (status, _) = app
            .send(json_request(Method::POST, "/api/v1/resume/summary", json!({})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_resume_before_save_is_404() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let (status, body) = app
            .send(authed_request(Method::GET, "/api/v1/resume"))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&body), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_save_then_get_resume() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let document = json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "experience": [{"company": "Acme", "role": "Engineer", "current": true, "bullets": ["Shipped v2"]}],
            "social_links": [{"platform": "GitHub", "url": "https://github.com/jane"}]
        });

        let (status, saved) = app
            .send(json_request(Method::PUT, "/api/v1/resume", document))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["user_id"], app.user_id.to_string());

        let (status, fetched) = app
            .send(authed_request(Method::GET, "/api/v1/resume"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["full_name"], "Jane Doe");
        assert_eq!(fetched["experience"][0]["bullets"][0], "Shipped v2");
        assert_eq!(fetched["social_links"][0]["url"], "https://github.com/jane");
        assert!(fetched.get("document").is_none());
    }

    #[tokio::test]
    async fn test_save_resume_without_name_is_400() {
        let app = TestApp::new(MockLlm::replying("unused"));
        let (status, _) = app
            .send(json_request(
                Method::PUT,
                "/api/v1/resume",
                json!({"email": "jane@example.com"}),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_rejects_non_pdf_and_stores_nothing() {
        let app = TestApp::new(MockLlm::replying("{}"));
        let (status, _) = app
            .send(multipart_request(
                "/api/v1/resume/parse",
                Some(("resume.txt", b"Jane Doe\nEngineer")),
                &[],
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(app.files.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_pdf_returns_resume_and_keeps_original() {
        let app = TestApp::new(MockLlm::replying(PARSED_RESUME));
        let pdf = sample_pdf(&["Jane Doe", "Senior Backend Engineer", "Acme, Engineer"]);
        let (status, body) = app
            .send(multipart_request(
                "/api/v1/resume/parse",
                Some(("jane.pdf", &pdf)),
                &[],
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["full_name"], "Jane Doe");
        assert_eq!(body["resume"]["experience"][0]["company"], "Acme");
        assert!(body["extracted_chars"].as_u64().unwrap() > 0);

        let file_key = body["file_key"].as_str().unwrap();
        assert!(file_key.starts_with(&format!("uploads/{}/", app.user_id)));
        assert!(file_key.ends_with(".pdf"));
        let objects = app.files.objects.lock().unwrap();
        assert_eq!(objects.get(file_key).map(|b| b.len()), Some(pdf.len()));
        drop(objects);

        assert!(app.llm.prompts()[0].contains("Senior Backend Engineer"));
    }

    #[tokio::test]
    async fn test_parse_unreadable_pdf_stores_nothing() {
        let app = TestApp::new(MockLlm::replying(PARSED_RESUME));
        let (status, body) = app
            .send(multipart_request(
                "/api/v1/resume/parse",
                Some(("broken.pdf", b"%PDF-1.4 garbage")),
                &[],
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
        assert!(app.files.objects.lock().unwrap().is_empty());
        assert!(app.llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_parse_upstream_failure_stores_nothing() {
        let app = TestApp::new(MockLlm::failing());
        let pdf = sample_pdf(&["Jane Doe", "Senior Backend Engineer"]);
        let (status, body) = app
            .send(multipart_request(
                "/api/v1/resume/parse",
                Some(("jane.pdf", &pdf)),
                &[],
            ))
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_code(&body), "LLM_ERROR");
        assert!(app.files.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_oversized_upload_is_400() {
        let app = TestApp::new(MockLlm::replying(PARSED_RESUME));
        let mut oversized = b"%PDF-1.4\n".to_vec();
        oversized.resize(app.max_upload_bytes + 1, b' ');
        let (status, body) = app
            .send(multipart_request(
                "/api/v1/resume/parse",
                Some(("huge.pdf", &oversized)),
                &[],
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            format!("Uploaded file exceeds the {} byte limit", app.max_upload_bytes)
        );
        assert!(app.files.objects.lock().unwrap().is_empty());
    }
}
