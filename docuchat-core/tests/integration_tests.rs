//! Integration tests for docuchat-core infrastructure

use docuchat_core::{
    validation_error, AnswerSource, DocuChatConfig, DocuChatError, ErrorContext, ThemeId,
};

#[test]
fn test_error_context_and_logging() {
    let error = validation_error!("Question must not be empty", "question", "conversation");

    match &error {
        DocuChatError::Validation {
            message,
            field,
            context,
        } => {
            assert_eq!(message, "Question must not be empty");
            assert_eq!(field.as_deref(), Some("question"));
            assert_eq!(context.component, "conversation");
            assert!(!context.error_id.is_empty());
        }
        _ => panic!("Expected Validation error"),
    }

    // Should not panic
    error.log();
}

#[test]
fn test_user_message_ladder() {
    // Backend-provided message is surfaced verbatim
    let api = DocuChatError::Api {
        status: 500,
        message: "Only PDF files allowed".to_string(),
        context: ErrorContext::new("rag_client"),
    };
    assert_eq!(api.user_message(), "Only PDF files allowed");

    // Transport message is the next rung
    let network = DocuChatError::Network {
        message: "connection refused".to_string(),
        source: None,
        context: ErrorContext::new("rag_client"),
    };
    assert_eq!(network.user_message(), "connection refused");
    assert!(network.is_recoverable());

    // Blank backend message falls through to the generic fallback
    let blank = DocuChatError::Api {
        status: 502,
        message: "  ".to_string(),
        context: ErrorContext::new("rag_client"),
    };
    assert_eq!(blank.user_message(), "Failed to get response from server");

    let io = DocuChatError::Io(std::io::Error::other("disk gone"));
    assert_eq!(io.user_message(), "Failed to get response from server");
    assert!(!io.is_recoverable());
}

#[test]
fn test_theme_enumeration() {
    assert_eq!(ThemeId::ALL.len(), 8);
    assert_eq!(ThemeId::default(), ThemeId::Cyberpunk);

    // Display/FromStr round-trip for every theme
    for theme in ThemeId::ALL {
        let parsed: ThemeId = theme.to_string().parse().unwrap();
        assert_eq!(parsed, theme);
    }

    // Case-insensitive parsing, unknown names rejected
    assert_eq!("Sakura".parse::<ThemeId>().unwrap(), ThemeId::Sakura);
    assert!("vaporwave".parse::<ThemeId>().is_err());
}

#[test]
fn test_source_chip_rendering() {
    let source = AnswerSource {
        name: "policy.pdf".to_string(),
        confidence: 92,
    };
    assert_eq!(source.chip(), "policy.pdf · 92%");
}

#[test]
fn test_config_defaults_and_validation() {
    let config = DocuChatConfig::default();
    assert_eq!(config.server.base_url, "http://localhost:5001");
    assert_eq!(config.server.timeout_seconds, 30);
    assert_eq!(config.ui.theme, ThemeId::Cyberpunk);
    assert!(config.validate().is_ok());

    let mut bad_url = DocuChatConfig::default();
    bad_url.server.base_url = "not a url".to_string();
    assert!(bad_url.validate().is_err());

    let mut zero_timeout = DocuChatConfig::default();
    zero_timeout.server.timeout_seconds = 0;
    assert!(zero_timeout.validate().is_err());
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = DocuChatConfig::default();
    config.server.base_url = "http://rag.internal:8080".to_string();
    config.ui.theme = ThemeId::Ocean;
    config.save_to_file(&path).unwrap();

    let loaded = DocuChatConfig::from_file(&path).unwrap();
    assert_eq!(loaded.server.base_url, "http://rag.internal:8080");
    assert_eq!(loaded.ui.theme, ThemeId::Ocean);
}
