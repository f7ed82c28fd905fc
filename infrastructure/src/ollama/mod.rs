//! Ollama adapters
//!
//! - [`catalog::OllamaCliCatalog`] lists models with `ollama list`
//! - [`gateway::OllamaChatGateway`] talks to the `/api/chat` endpoint

pub mod catalog;
pub mod gateway;
pub mod host;
mod protocol;
