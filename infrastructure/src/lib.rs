//! Infrastructure layer for gumchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the `ollama` CLI and HTTP API, the `gum`
//! terminal tools, transcript and conversation-log files, plus
//! configuration file loading.

pub mod config;
pub mod gum;
pub mod logging;
pub mod ollama;
mod process;
pub mod tool_check;
pub mod transcript;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use gum::{DEFAULT_GUM_COMMAND, spinner::GumSpinner, terminal::GumTerminal};
pub use logging::JsonlConversationLogger;
pub use ollama::{
    catalog::{DEFAULT_OLLAMA_COMMAND, OllamaCliCatalog},
    gateway::OllamaChatGateway,
    host::{DEFAULT_OLLAMA_HOST, normalize_host},
};
pub use tool_check::{ToolStatus, check_tools, is_command_available, missing_tools};
pub use transcript::MarkdownTranscriptStore;
