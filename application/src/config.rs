//! Application-level configuration.
//!
//! This module provides configuration types that control how the chat
//! use cases behave once the infrastructure has loaded the settings.

use serde::{Deserialize, Serialize};

/// Prompt placeholder shown by the line-input tool.
pub const DEFAULT_PLACEHOLDER: &str = "You: ";

/// Title shown next to the busy indicator while the model is answering.
pub const DEFAULT_BUSY_TITLE: &str = "Ollama is thinking...";

/// Question asked before writing a transcript.
pub const SAVE_PROMPT: &str = "Save conversation?";

/// What the conversation loop does after the chat API reports an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiErrorPolicy {
    /// Report the error and end the session without offering to save.
    #[default]
    End,
    /// Report the error and return to the prompt.
    Continue,
}

impl std::str::FromStr for ApiErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "end" => Ok(ApiErrorPolicy::End),
            "continue" => Ok(ApiErrorPolicy::Continue),
            other => Err(format!(
                "unknown API error policy '{}', expected 'end' or 'continue'",
                other
            )),
        }
    }
}

/// Which busy indicator is shown while waiting for a reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerBackend {
    /// `gum spin` child process.
    #[default]
    Gum,
    /// In-process `indicatif` spinner.
    Indicatif,
}

impl std::str::FromStr for SpinnerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gum" => Ok(SpinnerBackend::Gum),
            "indicatif" => Ok(SpinnerBackend::Indicatif),
            other => Err(format!(
                "unknown spinner '{}', expected 'gum' or 'indicatif'",
                other
            )),
        }
    }
}

/// Chat behavior configuration.
#[derive(Debug, Clone)]
pub struct ChatBehavior {
    /// Policy applied when the chat API fails.
    pub on_api_error: ApiErrorPolicy,
    /// Reject chooser results that are not among the offered models.
    pub strict_selection: bool,
    /// Placeholder for the line-input tool.
    pub placeholder: String,
    /// Title for the busy indicator.
    pub busy_title: String,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            on_api_error: ApiErrorPolicy::End,
            strict_selection: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            busy_title: DEFAULT_BUSY_TITLE.to_string(),
        }
    }
}

impl ChatBehavior {
    pub fn with_api_error_policy(mut self, policy: ApiErrorPolicy) -> Self {
        self.on_api_error = policy;
        self
    }

    pub fn with_strict_selection(mut self, strict: bool) -> Self {
        self.strict_selection = strict;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
