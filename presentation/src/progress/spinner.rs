//! In-process busy indicator

use gumchat_application::ports::busy_indicator::{BusyGuard, BusyIndicator};
use gumchat_application::ports::terminal_ui::UiError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Shows an `indicatif` spinner while a reply is outstanding
pub struct IndicatifSpinner;

impl IndicatifSpinner {
    pub fn new() -> Self {
        Self
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn spinner(title: &str) -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(title.to_string());
        bar
    }
}

impl Default for IndicatifSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator for IndicatifSpinner {
    fn start(&self, title: &str) -> Result<BusyGuard, UiError> {
        let bar = Self::spinner(title);
        bar.enable_steady_tick(TICK);
        Ok(BusyGuard::new(move || bar.finish_and_clear()))
    }
}
