//! Interactive prompts via `gum`

use super::spawn_error;
use crate::process::strip_line_ending;
use gumchat_application::ports::terminal_ui::{TerminalUi, UiError};
use std::process::{Command, Stdio};
use tracing::debug;

/// [`TerminalUi`] that shells out to `gum` for every interaction.
///
/// The user talks to gum directly on the terminal; only gum's stdout is
/// captured where an answer is expected.
pub struct GumTerminal {
    program: String,
}

impl GumTerminal {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(subcommand);
        cmd
    }

    /// Run with the terminal attached, capturing stdout only.
    fn capture(&self, mut cmd: Command) -> Result<(bool, String), UiError> {
        let output = cmd
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .stdout(Stdio::piped())
            .output()
            .map_err(|e| spawn_error(&self.program, e))?;
        Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

impl TerminalUi for GumTerminal {
    fn choose(&self, options: &[String]) -> Result<String, UiError> {
        debug!("gum choose ({} options)", options.len());
        let mut cmd = self.command("choose");
        cmd.args(options);
        // Exit status is ignored: a cancelled picker prints nothing.
        let (_, stdout) = self.capture(cmd)?;
        Ok(stdout)
    }

    fn read_line(&self, placeholder: &str) -> Result<Option<String>, UiError> {
        let mut cmd = self.command("input");
        cmd.args(["--placeholder", placeholder]);
        let (success, stdout) = self.capture(cmd)?;
        if !success {
            debug!("gum input cancelled");
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&stdout).to_string()))
    }

    fn confirm(&self, prompt: &str) -> Result<bool, UiError> {
        let status = self
            .command("confirm")
            .arg(prompt)
            .status()
            .map_err(|e| spawn_error(&self.program, e))?;
        Ok(status.success())
    }

    fn display_markdown(&self, text: &str) -> Result<(), UiError> {
        let status = self
            .command("format")
            .arg("--")
            .arg(text)
            .status()
            .map_err(|e| spawn_error(&self.program, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(UiError::ToolFailed {
                tool: format!("{} format", self.program),
                message: status.to_string(),
            })
        }
    }
}
