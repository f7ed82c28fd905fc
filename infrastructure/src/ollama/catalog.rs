//! Model catalog backed by the `ollama list` command

use gumchat_application::ports::model_catalog::{CatalogError, ModelCatalog};
use gumchat_domain::{ModelId, parse_model_list};
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use tracing::debug;

/// Default listing executable
pub const DEFAULT_OLLAMA_COMMAND: &str = "ollama";

/// Lists models by running `<program> list` and parsing its table.
pub struct OllamaCliCatalog {
    program: String,
}

impl OllamaCliCatalog {
    /// Use a different executable (absolute path or name on PATH).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} list", self.program)
    }
}

impl ModelCatalog for OllamaCliCatalog {
    fn list_models(&self) -> Result<Vec<ModelId>, CatalogError> {
        debug!("Running `{}`", self.command_line());

        let output = Command::new(&self.program)
            .arg("list")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CatalogError::CommandNotFound(self.program.clone()),
                _ => CatalogError::Io {
                    command: self.command_line(),
                    message: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(CatalogError::CommandFailed {
                command: self.command_line(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_model_list(&stdout))
    }
}
