//! Configuration file loading for gumchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `GUMCHAT_<SECTION>__<KEY>` (e.g. `GUMCHAT_OLLAMA__HOST`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./gumchat.toml` or `./.gumchat.toml`
//! 4. Global: `~/.config/gumchat/config.toml` (platform config dir)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig, FileOllamaConfig,
    FileTranscriptConfig, FileUiConfig,
};
pub use loader::ConfigLoader;
