//! Terminal UI port
//!
//! The interactive pieces of the session: picking a model, reading a
//! line, yes/no confirmation and pretty-printing replies.

use thiserror::Error;

/// Errors raised by terminal UI adapters
#[derive(Error, Debug)]
pub enum UiError {
    #[error("'{0}' is not installed. Please install it to use this application.")]
    ToolNotFound(String),

    #[error("'{tool}' failed: {message}")]
    ToolFailed { tool: String, message: String },
}

impl UiError {
    pub fn is_tool_missing(&self) -> bool {
        matches!(self, UiError::ToolNotFound(_))
    }
}

/// Interactive terminal operations.
///
/// All calls block until the user has answered.
pub trait TerminalUi: Send + Sync {
    /// Let the user pick one of `options`; returns whatever the picker
    /// printed, untrimmed. Empty when nothing was picked.
    fn choose(&self, options: &[String]) -> Result<String, UiError>;

    /// Read one line of text. `None` means the user cancelled the prompt.
    fn read_line(&self, placeholder: &str) -> Result<Option<String>, UiError>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, UiError>;

    /// Render Markdown text to the terminal.
    fn display_markdown(&self, text: &str) -> Result<(), UiError>;
}
