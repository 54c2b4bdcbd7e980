//! In-memory doubles and request helpers shared by handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use chrono::{Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionClient, LlmError};
use crate::models::achievement::{AchievementRow, NewAchievement};
use crate::models::profile::{ProfileRow, ProfileUpsert};
use crate::models::resume::ResumeRow;
use crate::models::session::SessionRow;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileStore;
use crate::store::Store;

pub const TEST_TOKEN: &str = "test-session-token";
pub const EXPIRED_TOKEN: &str = "expired-session-token";
const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Scripted completion client. Replays one fixed reply (or failure) and
/// records every prompt it receives.
pub struct MockLlm {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockLlm {
    async fn call_text(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<String, SessionRow>>,
    profiles: Mutex<HashMap<Uuid, ProfileRow>>,
    resumes: Mutex<HashMap<Uuid, ResumeRow>>,
    achievements: Mutex<Vec<AchievementRow>>,
}

impl MemoryStore {
    pub fn add_session(&self, token: &str, user_id: Uuid, ttl: Duration) {
        self.sessions.lock().unwrap().insert(
            token.to_string(),
            SessionRow {
                token: token.to_string(),
                user_id,
                expires_at: Utc::now() + ttl,
            },
        );
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.lock().unwrap().len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_session(&self, token: &str) -> Result<Option<SessionRow>, AppError> {
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn complete_onboarding(&self, profile: &ProfileUpsert) -> Result<ProfileRow, AppError> {
        let mut profiles = self.profiles.lock().unwrap();
        let now = Utc::now();
        let created_at = profiles
            .get(&profile.user_id)
            .map(|p| p.created_at)
            .unwrap_or(now);
        let row = ProfileRow {
            user_id: profile.user_id,
            full_name: profile.full_name.clone(),
            headline: profile.headline.clone(),
            current_position: profile.current_position.clone(),
            target_position: profile.target_position.clone(),
            experience_level: profile.experience_level.as_str().to_string(),
            industries: profile.industries.clone(),
            career_goals: profile.career_goals.clone(),
            onboarding_completed: true,
            created_at,
            updated_at: now,
        };
        profiles.insert(profile.user_id, row.clone());
        Ok(row)
    }

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(self.resumes.lock().unwrap().get(&user_id).cloned())
    }

    async fn save_resume(&self, user_id: Uuid, document: &Value) -> Result<ResumeRow, AppError> {
        let row = ResumeRow {
            user_id,
            document: document.clone(),
            updated_at: Utc::now(),
        };
        self.resumes.lock().unwrap().insert(user_id, row.clone());
        Ok(row)
    }

    async fn list_achievements(&self, user_id: Uuid) -> Result<Vec<AchievementRow>, AppError> {
        let mut rows: Vec<_> = self
            .achievements
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.achieved_on.cmp(&a.achieved_on));
        Ok(rows)
    }

    async fn insert_achievements(
        &self,
        user_id: Uuid,
        achievements: &[NewAchievement],
    ) -> Result<Vec<AchievementRow>, AppError> {
        let rows: Vec<_> = achievements
            .iter()
            .map(|a| AchievementRow {
                id: Uuid::new_v4(),
                user_id,
                title: a.title.clone(),
                description: a.description.clone(),
                achieved_on: a.achieved_on,
                category: a.category.as_str().to_string(),
                provenance: a.provenance.as_str().to_string(),
                created_at: Utc::now(),
            })
            .collect();
        self.achievements.lock().unwrap().extend(rows.iter().cloned());
        Ok(rows)
    }

    async fn delete_achievement(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.achievements.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| !(a.id == id && a.user_id == user_id));
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryFileStore {
    pub objects: Mutex<HashMap<String, Bytes>>,
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn put(&self, key: &str, body: Bytes, _content_type: &str) -> Result<(), AppError> {
        self.objects.lock().unwrap().insert(key.to_string(), body);
        Ok(())
    }
}

/// A router wired to in-memory doubles, plus handles to inspect them.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub files: Arc<MemoryFileStore>,
    pub llm: Arc<MockLlm>,
    pub user_id: Uuid,
    pub max_upload_bytes: usize,
}

impl TestApp {
    pub fn new(llm: MockLlm) -> Self {
        let user_id = Uuid::new_v4();
        let store = Arc::new(MemoryStore::default());
        store.add_session(TEST_TOKEN, user_id, Duration::hours(1));
        store.add_session(EXPIRED_TOKEN, user_id, Duration::hours(-1));
        let files = Arc::new(MemoryFileStore::default());
        let llm = Arc::new(llm);

        let state = AppState {
            store: store.clone(),
            files: files.clone(),
            llm: llm.clone(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        };

        Self {
            router: build_router(state),
            store,
            files,
            llm,
            user_id,
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const BOUNDARY: &str = "careerforge-test-boundary";

/// Builds a multipart body. `file` is `(file_name, bytes)` sent as the `file` part.
pub fn multipart_request(
    uri: &str,
    file: Option<(&str, &[u8])>,
    fields: &[(&str, &str)],
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Asserts the shared error envelope and returns its code.
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"]
        .as_str()
        .expect("response should carry an error.code field")
}

/// A one-page PDF with each entry of `lines` on its own line, set in Helvetica.
/// Text must not contain parentheses or backslashes.
pub fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT /F1 12 Tf 72 720 Td 14 TL\n");
    for line in lines {
        content.push_str(&format!("({line}) Tj T*\n"));
    }
    content.push_str("ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", index + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!(
        "xref\n0 {}\n0000000000 65535 f \n",
        objects.len() + 1
    ));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}
