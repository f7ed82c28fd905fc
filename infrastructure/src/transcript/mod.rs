//! Transcript persistence
//!
//! Provides [`MarkdownTranscriptStore`], which implements the
//! [`TranscriptStore`](gumchat_application::TranscriptStore) port.

mod markdown_store;

pub use markdown_store::{DEFAULT_TRANSCRIPT_DIR, MarkdownTranscriptStore, transcript_file_name};
