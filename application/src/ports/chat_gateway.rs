//! Chat gateway port
//!
//! Defines the interface for sending a conversation to a chat completion
//! API and getting the assistant's reply back.

use async_trait::async_trait;
use gumchat_domain::{Message, ModelId};
use thiserror::Error;

/// Errors that can occur during chat gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The API answered with a structured error.
    #[error("{detail}")]
    Api { status: Option<u16>, detail: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// The human-readable error detail.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Gateway for chat completion
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send the full history to `model` and return the reply text.
    async fn chat(&self, model: &ModelId, messages: &[Message]) -> Result<String, GatewayError>;
}
