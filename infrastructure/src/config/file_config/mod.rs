//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

mod chat;
mod logging;
mod ollama;
mod transcript;
mod ui;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use ollama::FileOllamaConfig;
pub use transcript::FileTranscriptConfig;
pub use ui::FileUiConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("ollama.timeout_secs cannot be 0")]
    ZeroTimeout,

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ollama connection settings
    pub ollama: FileOllamaConfig,
    /// Terminal tool settings
    pub ui: FileUiConfig,
    /// Conversation loop behavior
    pub chat: FileChatConfig,
    /// Transcript output
    pub transcript: FileTranscriptConfig,
    /// Structured conversation log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    ///
    /// Problems are reported as warnings by the binary; the offending values
    /// are still used as given.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.ollama.timeout_secs == Some(0) {
            issues.push(ConfigValidationError::ZeroTimeout);
        }
        if self.ollama.command.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("ollama.command"));
        }
        if self.ui.command.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("ui.command"));
        }
        if self.ui.spinner_style.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("ui.spinner_style"));
        }
        if self.transcript.directory.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("transcript.directory"));
        }

        issues
    }
}
