//! External tool detection
//!
//! Reports whether the executables the chat flow shells out to (`ollama`,
//! `gum`) can be found on `PATH`.

use std::path::PathBuf;

/// Availability of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Command name as it would be invoked (e.g. "gum")
    pub command: String,
    /// What the command is used for
    pub purpose: &'static str,
    /// Resolved location, `None` when not on `PATH`
    pub path: Option<PathBuf>,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    /// One line for `--check-tools` output.
    pub fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!(
                "  [FOUND] {:<8} {} ({})",
                self.command,
                path.display(),
                self.purpose
            ),
            None => format!("  [     ] {:<8} not found ({})", self.command, self.purpose),
        }
    }
}

/// Check if a command is available on the system
pub fn is_command_available(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Look up every `(command, purpose)` pair on `PATH`, in order.
pub fn check_tools(tools: &[(&str, &'static str)]) -> Vec<ToolStatus> {
    tools
        .iter()
        .map(|(command, purpose)| ToolStatus {
            command: command.to_string(),
            purpose,
            path: which::which(command).ok(),
        })
        .collect()
}

/// Commands not found among `statuses`.
pub fn missing_tools(statuses: &[ToolStatus]) -> Vec<&str> {
    statuses
        .iter()
        .filter(|status| !status.is_available())
        .map(|status| status.command.as_str())
        .collect()
}
