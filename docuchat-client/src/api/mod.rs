//! API client for the RAG backend
//!
//! One request wrapper per backend operation, each a direct pass-through:
//! no retry, no caching, no batching. The only timeout is the transport
//! default configured on the HTTP client.

use async_trait::async_trait;
use docuchat_core::{AnswerSource, DocuChatError, DocuChatResult};
use serde::{Deserialize, Serialize};

pub mod http;

#[cfg(test)]
mod tests;

pub use http::HttpRagClient;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (host:port)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_seconds: 30,
            user_agent: format!("docuchat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Request body for the ask endpoint
#[derive(Debug, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// Response from the ask endpoint. The backend wraps the answer in an
/// envelope with extra fields; only the contract fields are modeled and
/// everything else is tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<AnswerSource>,
}

/// Response from the upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub filename: Option<String>,
    pub size: Option<u64>,
    pub chunks_added: Option<u64>,
}

/// A file entry as reported by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct BackendFile {
    pub filename: String,
    pub size: u64,
    /// Upload time as a unix timestamp, when the backend reports one
    pub uploaded: Option<f64>,
}

/// Response from the file listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<BackendFile>,
    pub count: Option<usize>,
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Response from the database stats endpoint. The stats payload shape is
/// backend-defined and treated as opaque JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub database: serde_json::Value,
}

/// Structured error payload the backend attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Trait for RAG backend clients. The application layer depends on this
/// seam; tests substitute a scripted implementation.
#[async_trait]
pub trait RagBackend: Send + Sync {
    /// Ask a natural-language question answered from indexed documents
    async fn ask(&self, question: &str) -> DocuChatResult<AskResponse>;

    /// Upload a PDF for indexing. `clear_old` asks the backend to wipe the
    /// vector store before ingesting this file.
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        clear_old: bool,
    ) -> DocuChatResult<UploadResponse>;

    /// Fetch the authoritative list of uploaded documents
    async fn list_files(&self) -> DocuChatResult<FileListResponse>;

    /// Delete an uploaded document by name
    async fn delete_file(&self, filename: &str) -> DocuChatResult<Ack>;

    /// Clear the entire vector database
    async fn clear_database(&self) -> DocuChatResult<Ack>;

    /// Fetch backend database statistics
    async fn database_stats(&self) -> DocuChatResult<StatsResponse>;
}

/// Extract the user-facing message from an error response body.
///
/// Prefers the structured `{"error": ...}` field, falls back to the raw
/// body, then to the HTTP status reason.
pub(crate) fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
    {
        return message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

/// Convert a non-2xx response into a structured error
pub(crate) async fn handle_response_error(
    response: reqwest::Response,
    operation: &str,
) -> DocuChatError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    DocuChatError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body, status),
        context: docuchat_core::ErrorContext::new("rag_client")
            .with_operation(operation)
            .with_suggestion(match status.as_u16() {
                400 => "Check the request input",
                404 => "The requested resource does not exist on the backend",
                _ => "Check that the RAG backend is healthy",
            }),
    }
}
