//! Multipart résumé uploads: read the `file` part, check it is a PDF, pull its text.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::storage::FileStore;

const FILE_FIELD: &str = "file";
const PDF_MAGIC: &[u8] = b"%PDF-";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A PDF upload plus any plain text fields sent alongside it.
#[derive(Debug)]
pub struct PdfUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
    pub fields: HashMap<String, String>,
}

impl PdfUpload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Drains the multipart body. Requires exactly one `file` part holding a PDF
/// no larger than `max_bytes`.
pub async fn read_pdf_upload(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<PdfUpload, AppError> {
    let mut file: Option<(Option<String>, Bytes)> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == FILE_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            file = Some((file_name, bytes));
        } else {
            let value = field.text().await?;
            fields.insert(name, value);
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "Uploaded file exceeds the {max_bytes} byte limit"
        )));
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }

    debug!("Received PDF upload: {} bytes", bytes.len());
    Ok(PdfUpload {
        file_name,
        bytes,
        fields,
    })
}

/// Extracts text on a blocking thread; PDF parsing is CPU-bound.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::Validation("Could not read PDF".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the PDF. Scanned documents are not supported."
                .to_string(),
        ));
    }
    Ok(text)
}

/// Keeps the original PDF under the user's prefix and returns its key.
pub async fn store_original(
    files: &dyn FileStore,
    user_id: Uuid,
    upload: &PdfUpload,
) -> Result<String, AppError> {
    let key = format!("uploads/{}/{}.pdf", user_id, Uuid::new_v4());
    files
        .put(&key, upload.bytes.clone(), PDF_CONTENT_TYPE)
        .await?;
    info!(
        "Stored upload {:?} for user {} at {}",
        upload.file_name, user_id, key
    );
    Ok(key)
}

/// Collapses runs of blank lines and trailing spaces left by PDF text extraction.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
