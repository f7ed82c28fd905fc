//! Save Transcript use case
//!
//! Offers to persist a finished conversation.

use crate::config::SAVE_PROMPT;
use crate::ports::session_notifier::SessionNotifier;
use crate::ports::terminal_ui::TerminalUi;
use crate::ports::transcript_store::TranscriptStore;
use gumchat_domain::Conversation;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened to the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to save; the user was not asked.
    Skipped,
    /// The user said no.
    Declined,
    /// The confirmation tool is unavailable.
    Unavailable,
    /// Written to this path.
    Saved(PathBuf),
    /// The write failed.
    Failed,
}

/// Use case for transcript persistence
pub struct SaveTranscriptUseCase {
    ui: Arc<dyn TerminalUi>,
    store: Arc<dyn TranscriptStore>,
}

impl SaveTranscriptUseCase {
    pub fn new(ui: Arc<dyn TerminalUi>, store: Arc<dyn TranscriptStore>) -> Self {
        Self { ui, store }
    }

    pub fn execute(
        &self,
        conversation: &Conversation,
        notifier: &dyn SessionNotifier,
    ) -> SaveOutcome {
        if conversation.is_empty() {
            debug!("Empty conversation, nothing to save");
            return SaveOutcome::Skipped;
        }

        match self.ui.confirm(SAVE_PROMPT) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Transcript save declined");
                return SaveOutcome::Declined;
            }
            Err(e) => {
                warn!("Confirmation failed: {}", e);
                notifier.on_ui_error(&e);
                return SaveOutcome::Unavailable;
            }
        }

        match self.store.save(conversation) {
            Ok(path) => {
                info!("Transcript written to {}", path.display());
                notifier.on_transcript_saved(&path);
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                warn!("{}", e);
                notifier.on_transcript_failed(&e);
                SaveOutcome::Failed
            }
        }
    }
}
