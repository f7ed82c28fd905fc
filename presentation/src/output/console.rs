//! Console output for chat session events

use colored::Colorize;
use gumchat_application::ports::session_notifier::SessionNotifier;
use gumchat_application::{CatalogError, GatewayError, StoreError, UiError};
use gumchat_domain::{DomainError, ModelId};
use std::path::Path;
use tracing::debug;

/// Prints session events to the terminal.
///
/// Chat output goes to stdout so it interleaves with the gum tools; the
/// underlying error of a failure is only logged at debug level.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Turn colored output on or off for the whole process.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    pub fn discovery_failed_message() -> String {
        format!(
            "{} Could not get Ollama models. Make sure Ollama is running.",
            "Error:".red().bold()
        )
    }

    pub fn chat_started_message(model: &ModelId) -> String {
        format!(
            "Starting chat with {}. Type 'exit' or 'quit' to end.",
            model.as_str().cyan().bold()
        )
    }

    pub fn reply_header() -> String {
        format!("\n{}", "Assistant:".green().bold())
    }

    pub fn error_message(detail: impl std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), detail)
    }

    pub fn saved_message(path: &Path) -> String {
        format!("Conversation saved to {}", path.display())
    }
}

impl SessionNotifier for ConsoleNotifier {
    fn on_discovery_failed(&self, error: &CatalogError) {
        debug!("Model listing failed: {}", error);
        println!("{}", Self::discovery_failed_message());
    }

    fn on_no_models(&self) {
        println!("{} No Ollama models are installed.", "Note:".yellow().bold());
    }

    fn on_selection_rejected(&self, error: &DomainError) {
        println!("{}", Self::error_message(error));
    }

    fn on_chat_started(&self, model: &ModelId) {
        println!("{}", Self::chat_started_message(model));
    }

    fn on_reply(&self) {
        println!("{}", Self::reply_header());
    }

    fn on_reply_unformatted(&self, text: &str) {
        println!("{}", text);
    }

    fn on_chat_error(&self, error: &GatewayError) {
        println!("{}", Self::error_message(error.detail()));
    }

    fn on_ui_error(&self, error: &UiError) {
        println!("{}", Self::error_message(error));
    }

    fn on_transcript_saved(&self, path: &Path) {
        println!("{}", Self::saved_message(path));
    }

    fn on_transcript_failed(&self, error: &StoreError) {
        println!("{}", Self::error_message(error));
    }
}
