//! Helpers for running external commands

use std::io;
use std::process::{Child, ExitStatus};
use std::time::{Duration, Instant};

/// Poll interval while waiting for a child to exit
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait for a child process, giving up after `timeout`.
///
/// Returns `Ok(None)` when the child is still running at the deadline.
pub(crate) fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
) -> io::Result<Option<ExitStatus>> {
    let start = Instant::now();

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() > timeout {
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Wait briefly for a child to exit on its own, then kill it.
pub(crate) fn stop_child(child: &mut Child, grace: Duration) {
    match wait_with_timeout(child, grace) {
        Ok(Some(_)) => {}
        _ => {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Strip one trailing line terminator, keeping any other whitespace.
pub(crate) fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
