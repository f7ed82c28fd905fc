//! Transcript store port

use gumchat_domain::Conversation;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a transcript
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not write transcript {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists a finished conversation.
pub trait TranscriptStore: Send + Sync {
    /// Write `conversation` and return where it went.
    fn save(&self, conversation: &Conversation) -> Result<PathBuf, StoreError>;
}
