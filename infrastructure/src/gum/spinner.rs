//! `gum spin` busy indicator
//!
//! `gum spin` animates for as long as the command it wraps is running.
//! The wrapped command here is a small shell loop that lives while a
//! marker file exists; stopping the indicator removes the marker, lets
//! gum exit on its own (restoring the cursor), and waits for it.

use super::spawn_error;
use crate::process::stop_child;
use gumchat_application::ports::busy_indicator::{BusyGuard, BusyIndicator};
use gumchat_application::ports::terminal_ui::UiError;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Spinner style passed to `gum spin --spinner`
pub const DEFAULT_SPINNER_STYLE: &str = "dots";

/// How long gum gets to exit after the marker is gone
const STOP_GRACE: Duration = Duration::from_secs(2);

/// Keeps `gum spin` busy while `$1` exists
const KEEPALIVE_SCRIPT: &str = r#"while [ -e "$1" ]; do sleep 0.1; done"#;

static MARKER_SEQ: AtomicU64 = AtomicU64::new(0);

/// [`BusyIndicator`] running `gum spin` in a child process
pub struct GumSpinner {
    program: String,
    style: String,
}

impl GumSpinner {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            style: DEFAULT_SPINNER_STYLE.to_string(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    fn marker_path() -> PathBuf {
        let seq = MARKER_SEQ.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("gumchat-spin-{}-{}", std::process::id(), seq))
    }
}

impl BusyIndicator for GumSpinner {
    fn start(&self, title: &str) -> Result<BusyGuard, UiError> {
        let marker = Self::marker_path();
        std::fs::write(&marker, b"").map_err(|e| UiError::ToolFailed {
            tool: format!("{} spin", self.program),
            message: format!("could not create {}: {}", marker.display(), e),
        })?;

        let spawned = Command::new(&self.program)
            .args(["spin", "--spinner", &self.style, "--title", title, "--"])
            .args(["sh", "-c", KEEPALIVE_SCRIPT, "sh"])
            .arg(&marker)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                let _ = std::fs::remove_file(&marker);
                return Err(spawn_error(&self.program, e));
            }
        };
        debug!("gum spin started (pid {})", child.id());

        Ok(BusyGuard::new(move || {
            if let Err(e) = std::fs::remove_file(&marker) {
                warn!("Could not remove spinner marker {}: {}", marker.display(), e);
            }
            stop_child(&mut child, STOP_GRACE);
            debug!("gum spin stopped");
        }))
    }
}
