//! Model catalog port
//!
//! Lists the chat models available on this machine.

use gumchat_domain::ModelId;
use thiserror::Error;

/// Errors that can occur while listing models
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("`{0}` was not found on PATH")]
    CommandNotFound(String),

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {message}")]
    Io { command: String, message: String },
}

/// Source of locally available model identifiers.
pub trait ModelCatalog: Send + Sync {
    /// List models in the order the backend reports them.
    fn list_models(&self) -> Result<Vec<ModelId>, CatalogError>;
}
