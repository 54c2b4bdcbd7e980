use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::storage::FileStore;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub files: Arc<dyn FileStore>,
    pub llm: Arc<dyn CompletionClient>,
    /// Request body cap for multipart upload routes.
    pub max_upload_bytes: usize,
}
