//! Ollama configuration from TOML (`[ollama]` section)

use crate::ollama::catalog::DEFAULT_OLLAMA_COMMAND;
use crate::ollama::host::resolve_host;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw Ollama configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Server address; `OLLAMA_HOST` is used when unset
    pub host: Option<String>,
    /// Chat request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// Executable used for `ollama list`
    pub command: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout_secs: None,
            command: DEFAULT_OLLAMA_COMMAND.to_string(),
        }
    }
}

impl FileOllamaConfig {
    /// Normalized server address, given the value of `OLLAMA_HOST`.
    pub fn resolved_host(&self, env_host: Option<&str>) -> String {
        resolve_host(self.host.as_deref(), env_host)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
