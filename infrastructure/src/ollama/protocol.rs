//! Wire types for the Ollama `/api/chat` endpoint

use gumchat_domain::Message;
use serde::{Deserialize, Serialize};

/// Request body for a non-streaming chat call
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
}

/// Successful chat response (fields we use)
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub message: Message,
    #[serde(default)]
    pub done: bool,
}

/// Error body returned by the server
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}
