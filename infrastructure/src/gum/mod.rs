//! Terminal UI adapters built on the `gum` command-line tool
//!
//! - [`terminal::GumTerminal`]: choose / input / confirm / format
//! - [`spinner::GumSpinner`]: `gum spin` as a busy indicator

pub mod spinner;
pub mod terminal;

use gumchat_application::ports::terminal_ui::UiError;
use std::io::{self, ErrorKind};

/// Default executable name
pub const DEFAULT_GUM_COMMAND: &str = "gum";

/// Map a spawn failure onto the UI error taxonomy.
fn spawn_error(program: &str, error: io::Error) -> UiError {
    match error.kind() {
        ErrorKind::NotFound => UiError::ToolNotFound(program.to_string()),
        _ => UiError::ToolFailed {
            tool: program.to_string(),
            message: error.to_string(),
        },
    }
}
