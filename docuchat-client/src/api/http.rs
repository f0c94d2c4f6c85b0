//! reqwest-backed implementation of the backend API

use async_trait::async_trait;
use docuchat_core::{DocuChatError, DocuChatResult, ErrorContext};
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::{
    handle_response_error, Ack, ApiConfig, AskRequest, AskResponse, FileListResponse, RagBackend,
    StatsResponse, UploadResponse,
};

/// HTTP client for the RAG backend
pub struct HttpRagClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpRagClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiConfig) -> DocuChatResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DocuChatError::Config {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("rag_client").with_operation("create_client"),
            })?;

        debug!("Created RAG backend client for {}", config.base_url);

        Ok(Self { client, config })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn network_error(e: reqwest::Error, operation: &str) -> DocuChatError {
        DocuChatError::Network {
            message: e.to_string(),
            source: Some(Box::new(e)),
            context: ErrorContext::new("rag_client")
                .with_operation(operation)
                .with_suggestion("Check that the RAG backend is running and reachable"),
        }
    }

    fn decode_error(e: reqwest::Error, operation: &str) -> DocuChatError {
        DocuChatError::Network {
            message: format!("Failed to parse backend response: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("rag_client").with_operation(operation),
        }
    }

    async fn check(
        response: reqwest::Response,
        operation: &str,
    ) -> DocuChatResult<reqwest::Response> {
        if !response.status().is_success() {
            return Err(handle_response_error(response, operation).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl RagBackend for HttpRagClient {
    async fn ask(&self, question: &str) -> DocuChatResult<AskResponse> {
        let url = self.url("/ask");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|e| Self::network_error(e, "ask"))?;

        Self::check(response, "ask")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "ask"))
    }

    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        clear_old: bool,
    ) -> DocuChatResult<UploadResponse> {
        let url = self.url("/upload");
        debug!("POST {} ({} bytes, clear_old={})", url, bytes.len(), clear_old);

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| DocuChatError::Validation {
                message: format!("Invalid upload for '{}': {}", filename, e),
                field: Some("file".to_string()),
                context: ErrorContext::new("rag_client").with_operation("upload"),
            })?;

        let mut form = Form::new().part("file", part);
        if clear_old {
            form = form.text("clear_old", "true");
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::network_error(e, "upload"))?;

        Self::check(response, "upload")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "upload"))
    }

    async fn list_files(&self) -> DocuChatResult<FileListResponse> {
        let url = self.url("/files");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::network_error(e, "list_files"))?;

        Self::check(response, "list_files")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "list_files"))
    }

    async fn delete_file(&self, filename: &str) -> DocuChatResult<Ack> {
        let url = self.url(&format!("/files/{}", urlencoding::encode(filename)));
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| Self::network_error(e, "delete_file"))?;

        Self::check(response, "delete_file")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "delete_file"))
    }

    async fn clear_database(&self) -> DocuChatResult<Ack> {
        let url = self.url("/database/clear");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| Self::network_error(e, "clear_database"))?;

        Self::check(response, "clear_database")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "clear_database"))
    }

    async fn database_stats(&self) -> DocuChatResult<StatsResponse> {
        let url = self.url("/database/stats");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::network_error(e, "database_stats"))?;

        Self::check(response, "database_stats")
            .await?
            .json()
            .await
            .map_err(|e| Self::decode_error(e, "database_stats"))
    }
}
