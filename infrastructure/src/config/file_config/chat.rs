//! Chat behavior configuration from TOML (`[chat]` section)

use gumchat_application::{ApiErrorPolicy, ChatBehavior};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// What to do after the chat API reports an error
    pub on_api_error: ApiErrorPolicy,
    /// Reject chooser results that were not offered
    pub strict_selection: bool,
}

impl FileChatConfig {
    /// Convert to the application's [`ChatBehavior`], using `placeholder`
    /// for the input prompt.
    pub fn to_behavior(&self, placeholder: &str) -> ChatBehavior {
        ChatBehavior::default()
            .with_api_error_policy(self.on_api_error)
            .with_strict_selection(self.strict_selection)
            .with_placeholder(placeholder)
    }
}
