//! Ollama chat gateway implementation

use crate::ollama::host::normalize_host;
use crate::ollama::protocol::{ChatRequest, ChatResponse, ErrorResponse};
use async_trait::async_trait;
use gumchat_application::ports::chat_gateway::{ChatGateway, GatewayError};
use gumchat_domain::{Message, ModelId};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Chat gateway for a local or remote Ollama server
pub struct OllamaChatGateway {
    client: Client,
    base_url: String,
}

impl OllamaChatGateway {
    /// Gateway for `host`, with an optional request timeout.
    pub fn new(host: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let base_url = normalize_host(host);
        info!("OllamaChatGateway initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl ChatGateway for OllamaChatGateway {
    async fn chat(&self, model: &ModelId, messages: &[Message]) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages,
            stream: false,
        };

        debug!("POST {} ({} messages)", self.chat_url(), messages.len());

        let response = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| {
                    if body.trim().is_empty() {
                        status.to_string()
                    } else {
                        body.trim().to_string()
                    }
                });
            return Err(GatewayError::Api {
                status: Some(status.as_u16()),
                detail,
            });
        }

        let reply: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        debug!("Reply received (done = {})", reply.done);

        Ok(reply.message.content().to_string())
    }
}
