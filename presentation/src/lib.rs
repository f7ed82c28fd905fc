//! Presentation layer for gumchat
//!
//! This crate contains the CLI definition, console output for session
//! events, and the in-process busy indicator.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleNotifier;
pub use progress::spinner::IndicatifSpinner;
