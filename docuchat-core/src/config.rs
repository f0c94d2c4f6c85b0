//! Configuration management

use crate::error::{DocuChatError, DocuChatResult};
use crate::types::{DocuChatConfig, ServerConfig, ThemeId, UiConfig};

use std::path::{Path, PathBuf};

impl Default for DocuChatConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://localhost:5001".to_string(),
                timeout_seconds: 30,
            },
            ui: UiConfig {
                theme: ThemeId::default(),
                show_sources: true,
            },
        }
    }
}

impl DocuChatConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DocuChatResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocuChatError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: DocuChatConfig =
            toml::from_str(&content).map_err(|e| DocuChatError::Config {
                message: format!("Failed to parse config: {}", e),
                source: Some(Box::new(e)),
                context: crate::ErrorContext::new("config")
                    .with_operation("parse_toml")
                    .with_suggestion("Check TOML syntax in config file"),
            })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> DocuChatResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| DocuChatError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| DocuChatError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> DocuChatResult<()> {
        url::Url::parse(&self.server.base_url).map_err(|e| DocuChatError::Config {
            message: format!("Invalid server base URL '{}': {}", self.server.base_url, e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("validate")
                .with_suggestion("Set server.base_url to e.g. http://localhost:5001"),
        })?;

        if self.server.timeout_seconds == 0 {
            return Err(DocuChatError::Config {
                message: "Server timeout must be greater than 0".to_string(),
                source: None,
                context: crate::ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set server.timeout_seconds to a positive value"),
            });
        }

        Ok(())
    }

    /// Default locations searched when no explicit path is given
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|d| d.join("docuchat").join("config.toml")),
            dirs::home_dir().map(|d| d.join(".docuchat").join("config.toml")),
            Some(PathBuf::from("docuchat.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from the first existing default location, or fall back to defaults
    pub fn load_default() -> DocuChatResult<Self> {
        for path in Self::default_paths() {
            if path.exists() {
                tracing::info!("Loading configuration from {:?}", path);
                return Self::from_file(&path);
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}
