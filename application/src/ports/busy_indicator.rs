//! Busy indicator port
//!
//! A transient animation shown while a blocking call is outstanding.
//! Starting one hands back a [`BusyGuard`]; the indicator runs until the
//! guard is dropped, so every exit path of the guarded call stops it.

use crate::ports::terminal_ui::UiError;

/// Scoped handle on a running busy indicator.
#[must_use = "the indicator stops as soon as the guard is dropped"]
pub struct BusyGuard {
    stop: Option<Box<dyn FnOnce() + Send>>,
}

impl BusyGuard {
    /// Guard that runs `stop` exactly once when released.
    pub fn new(stop: impl FnOnce() + Send + 'static) -> Self {
        Self {
            stop: Some(Box::new(stop)),
        }
    }

    /// Guard with nothing to stop.
    pub fn noop() -> Self {
        Self { stop: None }
    }

    /// Stop the indicator now.
    pub fn finish(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for BusyGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusyGuard")
            .field("running", &self.stop.is_some())
            .finish()
    }
}

/// Starts busy indicators.
pub trait BusyIndicator: Send + Sync {
    fn start(&self, title: &str) -> Result<BusyGuard, UiError>;
}

/// Indicator that shows nothing (quiet mode, tests).
pub struct NoBusyIndicator;

impl BusyIndicator for NoBusyIndicator {
    fn start(&self, _title: &str) -> Result<BusyGuard, UiError> {
        Ok(BusyGuard::noop())
    }
}
