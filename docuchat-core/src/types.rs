//! Core data type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A source document that backed part of an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSource {
    /// Name of the ingested document
    pub name: String,
    /// Confidence percentage (0-100)
    pub confidence: u8,
}

impl AnswerSource {
    /// Render as a source chip, e.g. `policy.pdf · 92%`
    pub fn chip(&self) -> String {
        format!("{} · {}%", self.name, self.confidence)
    }
}

/// A single chat message. Immutable once appended to the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<AnswerSource>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<AnswerSource>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            sources,
        }
    }
}

/// Whether a file-list entry has been confirmed by the backend or only
/// added optimistically after a local upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Added locally after a successful upload, pending reconciliation
    Optimistic,
    /// Reported by the backend's authoritative file list
    Confirmed,
}

/// An entry in the visible document list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Session-local identifier. Not correlated with any backend identifier;
    /// the backend keys files by name.
    pub id: u64,
    pub name: String,
    pub size_bytes: u64,
    pub status: FileStatus,
}

impl UploadedFile {
    /// Human-readable size, e.g. `1.24 MB`
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// The fixed set of UI themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Cyberpunk,
    Neon,
    Sunset,
    Ocean,
    Forest,
    Cosmic,
    Matrix,
    Sakura,
}

impl ThemeId {
    pub const ALL: [ThemeId; 8] = [
        ThemeId::Cyberpunk,
        ThemeId::Neon,
        ThemeId::Sunset,
        ThemeId::Ocean,
        ThemeId::Forest,
        ThemeId::Cosmic,
        ThemeId::Matrix,
        ThemeId::Sakura,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Cyberpunk => "cyberpunk",
            ThemeId::Neon => "neon",
            ThemeId::Sunset => "sunset",
            ThemeId::Ocean => "ocean",
            ThemeId::Forest => "forest",
            ThemeId::Cosmic => "cosmic",
            ThemeId::Matrix => "matrix",
            ThemeId::Sakura => "sakura",
        }
    }

    /// Display label shown in the theme panel
    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Cyberpunk => "Cyberpunk",
            ThemeId::Neon => "Neon Dreams",
            ThemeId::Sunset => "Sunset Vibes",
            ThemeId::Ocean => "Deep Ocean",
            ThemeId::Forest => "Forest Night",
            ThemeId::Cosmic => "Cosmic Purple",
            ThemeId::Matrix => "Matrix Code",
            ThemeId::Sakura => "Sakura Pink",
        }
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::Cyberpunk
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown theme: {}", s))
    }
}

/// Non-fatal, user-facing notifications raised by the upload coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Files were rejected locally because they are not PDFs
    PdfOnly { rejected: Vec<String> },
    /// A single upload in a batch failed; the batch continued
    UploadFailed { file: String, reason: String },
    /// Reconciliation after an upload batch failed; the visible file list
    /// may be stale
    StaleFileList { reason: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::PdfOnly { rejected } => {
                write!(f, "Only PDF files can be uploaded (skipped: {})", rejected.join(", "))
            }
            Notice::UploadFailed { file, reason } => {
                write!(f, "Failed to upload {}: {}", file, reason)
            }
            Notice::StaleFileList { reason } => {
                write!(f, "Could not refresh the document list ({}); it may be out of date", reason)
            }
        }
    }
}

/// DocuChat configuration, loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocuChatConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

/// Connection settings for the RAG backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the backend (host:port)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme selected at startup
    pub theme: ThemeId,
    /// Whether to print source chips under answers
    pub show_sources: bool,
}
