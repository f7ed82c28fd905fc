//! Session notification port
//!
//! Defines the interface for reporting what happens during a chat
//! session. Implementations live in the presentation layer.

use crate::ports::chat_gateway::GatewayError;
use crate::ports::model_catalog::CatalogError;
use crate::ports::terminal_ui::UiError;
use crate::ports::transcript_store::StoreError;
use gumchat_domain::{DomainError, ModelId};
use std::path::Path;

/// Callback for user-facing session events
pub trait SessionNotifier: Send + Sync {
    /// Model listing failed; the session continues with no models.
    fn on_discovery_failed(&self, error: &CatalogError);

    /// Listing succeeded but reported no models.
    fn on_no_models(&self) {}

    /// The chooser returned a model that was not offered.
    fn on_selection_rejected(&self, _error: &DomainError) {}

    /// The conversation loop is about to start.
    fn on_chat_started(&self, model: &ModelId);

    /// A reply arrived and is about to be displayed.
    fn on_reply(&self);

    /// The reply could not be rendered by the UI; show it as plain text.
    fn on_reply_unformatted(&self, text: &str);

    /// The chat API failed.
    fn on_chat_error(&self, error: &GatewayError);

    /// A terminal UI tool failed or is missing.
    fn on_ui_error(&self, error: &UiError);

    /// The transcript was written.
    fn on_transcript_saved(&self, path: &Path);

    /// The transcript could not be written.
    fn on_transcript_failed(&self, error: &StoreError);
}

/// No-op notifier for when nothing should be printed
pub struct NoSessionNotifier;

impl SessionNotifier for NoSessionNotifier {
    fn on_discovery_failed(&self, _error: &CatalogError) {}
    fn on_chat_started(&self, _model: &ModelId) {}
    fn on_reply(&self) {}
    fn on_reply_unformatted(&self, _text: &str) {}
    fn on_chat_error(&self, _error: &GatewayError) {}
    fn on_ui_error(&self, _error: &UiError) {}
    fn on_transcript_saved(&self, _path: &Path) {}
    fn on_transcript_failed(&self, _error: &StoreError) {}
}
