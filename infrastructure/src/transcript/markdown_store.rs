//! Markdown file writer for finished conversations.
//!
//! One file per saved session, named after the local time of the save
//! (`YYYY_MM_DD_HHMMSS.md`). Messages are written one block at a time;
//! a failure part-way leaves a partial file behind.

use chrono::{DateTime, Local, TimeZone};
use gumchat_application::ports::transcript_store::{StoreError, TranscriptStore};
use gumchat_domain::{Conversation, render_message};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory used when none is configured, relative to the working directory
pub const DEFAULT_TRANSCRIPT_DIR: &str = "storage";

/// File name for a transcript saved at `time`.
pub fn transcript_file_name<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y_%m_%d_%H%M%S.md").to_string()
}

/// Writes transcripts as Markdown files into one directory.
pub struct MarkdownTranscriptStore {
    directory: PathBuf,
}

impl MarkdownTranscriptStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Save as if the current time were `time`.
    pub fn save_at<Tz: TimeZone>(
        &self,
        conversation: &Conversation,
        time: &DateTime<Tz>,
    ) -> Result<PathBuf, StoreError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = self.directory.join(transcript_file_name(time));
        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.directory).map_err(io_error)?;

        let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
        for message in conversation {
            writer
                .write_all(render_message(message).as_bytes())
                .map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;

        Ok(path)
    }
}

impl Default for MarkdownTranscriptStore {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPT_DIR)
    }
}

impl TranscriptStore for MarkdownTranscriptStore {
    fn save(&self, conversation: &Conversation) -> Result<PathBuf, StoreError> {
        self.save_at(conversation, &Local::now())
    }
}
