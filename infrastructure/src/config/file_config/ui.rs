//! Terminal UI configuration from TOML (`[ui]` section)

use crate::gum::DEFAULT_GUM_COMMAND;
use crate::gum::spinner::DEFAULT_SPINNER_STYLE;
use gumchat_application::SpinnerBackend;
use gumchat_application::config::DEFAULT_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Raw UI configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Busy indicator backend
    pub spinner: SpinnerBackend,
    /// `gum spin --spinner` style
    pub spinner_style: String,
    /// Placeholder for `gum input`
    pub placeholder: String,
    /// Enable colored terminal output
    pub color: bool,
    /// Executable used for all gum interactions
    pub command: String,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            spinner: SpinnerBackend::Gum,
            spinner_style: DEFAULT_SPINNER_STYLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            color: true,
            command: DEFAULT_GUM_COMMAND.to_string(),
        }
    }
}
