//! Transcript configuration from TOML (`[transcript]` section)

use crate::transcript::DEFAULT_TRANSCRIPT_DIR;
use serde::{Deserialize, Serialize};

/// Raw transcript configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Directory saved transcripts are written to
    pub directory: String,
}

impl Default for FileTranscriptConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_TRANSCRIPT_DIR.to_string(),
        }
    }
}
