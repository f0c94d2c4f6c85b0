//! Tests for the backend API client

use super::*;

#[test]
fn test_api_config_creation() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "http://localhost:5001");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.user_agent.starts_with("docuchat/"));

    let custom = ApiConfig::new("http://rag.internal:8080").with_timeout(5);
    assert_eq!(custom.base_url, "http://rag.internal:8080");
    assert_eq!(custom.timeout_seconds, 5);
}

#[test]
fn test_url_joining_tolerates_trailing_slash() {
    let client = HttpRagClient::new(ApiConfig::new("http://localhost:5001/")).unwrap();
    assert_eq!(client.url("/ask"), "http://localhost:5001/ask");
    assert_eq!(client.url("files"), "http://localhost:5001/files");
}

#[test]
fn test_ask_response_with_sources() {
    let json = r#"{
        "question": "What is the refund policy?",
        "answer": "Refunds within 30 days.",
        "sources": [{"name": "policy.pdf", "confidence": 92}],
        "method": "POST",
        "status": "success"
    }"#;

    let response: AskResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.answer, "Refunds within 30 days.");
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].name, "policy.pdf");
    assert_eq!(response.sources[0].confidence, 92);
}

#[test]
fn test_ask_response_without_sources() {
    // Sources are optional in the contract
    let response: AskResponse =
        serde_json::from_str(r#"{"answer": "No idea.", "status": "success"}"#).unwrap();
    assert_eq!(response.answer, "No idea.");
    assert!(response.sources.is_empty());

    // A body with no answer field still parses; the store renders a fallback
    let empty: AskResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
    assert!(empty.answer.is_empty());
}

#[test]
fn test_upload_response_envelope() {
    let json = r#"{
        "status": "success",
        "message": "Uploaded contract.pdf",
        "path": "data/contracts/contract.pdf",
        "chunks_added": 42,
        "cleared_old_data": false
    }"#;

    let response: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.status.as_deref(), Some("success"));
    assert_eq!(response.message.as_deref(), Some("Uploaded contract.pdf"));
    assert_eq!(response.chunks_added, Some(42));
    assert_eq!(response.filename, None);
}

#[test]
fn test_file_list_response() {
    let json = r#"{
        "files": [
            {"filename": "contract.pdf", "size": 10240, "uploaded": 1724700000.0},
            {"filename": "policy.pdf", "size": 2048}
        ],
        "count": 2
    }"#;

    let response: FileListResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.count, Some(2));
    assert_eq!(response.files.len(), 2);
    assert_eq!(response.files[0].filename, "contract.pdf");
    assert_eq!(response.files[0].size, 10240);
    assert_eq!(response.files[1].uploaded, None);
}

#[test]
fn test_stats_response_opaque_payload() {
    let json = r#"{"status": "success", "database": {"total_chunks": 1234, "collections": 1}}"#;
    let response: StatsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.status.as_deref(), Some("success"));
    assert_eq!(response.database["total_chunks"], 1234);
}

#[test]
fn test_error_message_extraction() {
    use reqwest::StatusCode;

    // Structured backend error payload wins
    assert_eq!(
        extract_error_message(
            r#"{"error": "Only PDF files allowed", "status": "failed"}"#,
            StatusCode::BAD_REQUEST,
        ),
        "Only PDF files allowed"
    );

    // Unstructured body is surfaced as-is
    assert_eq!(
        extract_error_message("backend exploded", StatusCode::INTERNAL_SERVER_ERROR),
        "backend exploded"
    );

    // Empty body falls back to the status reason
    assert_eq!(
        extract_error_message("", StatusCode::NOT_FOUND),
        "Not Found"
    );
}
