//! Select Model use case
//!
//! Hands the discovered models to the interactive chooser and returns
//! what the user picked.

use crate::ports::session_notifier::SessionNotifier;
use crate::ports::terminal_ui::TerminalUi;
use gumchat_domain::ModelId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for interactive model selection
pub struct SelectModelUseCase {
    ui: Arc<dyn TerminalUi>,
    strict: bool,
}

impl SelectModelUseCase {
    pub fn new(ui: Arc<dyn TerminalUi>) -> Self {
        Self { ui, strict: false }
    }

    /// Reject choices that are not among the offered models.
    pub fn with_strict_selection(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns `None` when there is nothing to choose from, the chooser is
    /// unavailable, or the user picked nothing.
    pub fn execute(&self, models: &[ModelId], notifier: &dyn SessionNotifier) -> Option<ModelId> {
        if models.is_empty() {
            debug!("No models to choose from");
            return None;
        }

        let options: Vec<String> = models.iter().map(ToString::to_string).collect();
        let picked = match self.ui.choose(&options) {
            Ok(picked) => picked,
            Err(e) => {
                warn!("Model chooser failed: {}", e);
                notifier.on_ui_error(&e);
                return None;
            }
        };

        // Whatever the chooser printed is taken as-is, apart from trimming.
        let chosen = ModelId::new(picked).ok()?;

        if self.strict
            && let Err(e) = chosen.ensure_offered(models)
        {
            warn!("{}", e);
            notifier.on_selection_rejected(&e);
            return None;
        }

        info!("Selected model {}", chosen);
        Some(chosen)
    }
}
