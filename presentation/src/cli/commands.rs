//! CLI command definitions

use clap::Parser;
use gumchat_application::SpinnerBackend;
use std::path::PathBuf;

/// CLI arguments for gumchat
#[derive(Parser, Debug)]
#[command(name = "gumchat")]
#[command(author, version, about = "Chat with local Ollama models in the terminal")]
#[command(long_about = r#"
gumchat lists the models your Ollama server has, lets you pick one with
`gum choose`, and then chats with it. Type `exit` or `quit` to end the
session; you will be asked whether to save the conversation as Markdown.

Requires `ollama` and `gum` on PATH (check with --check-tools).

Configuration files are loaded from (in priority order):
1. GUMCHAT_* environment variables (e.g. GUMCHAT_OLLAMA__HOST)
2. --config <path>     Explicit config file
3. ./gumchat.toml      Project-level config
4. ~/.config/gumchat/config.toml   Global config

Example:
  gumchat
  gumchat --model llama3:latest --storage ~/notes/chats
  gumchat --host gpu-box:11434 --spinner indicatif
"#)]
pub struct Cli {
    /// Chat with this model instead of choosing one (surrounding whitespace is trimmed)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Ollama server address (overrides config and OLLAMA_HOST)
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Directory transcripts are saved to
    #[arg(long, value_name = "DIR")]
    pub storage: Option<PathBuf>,

    /// Busy indicator shown while the model answers
    #[arg(long, value_name = "BACKEND", value_parser = parse_spinner)]
    pub spinner: Option<SpinnerBackend>,

    /// Keep chatting after an API error instead of ending the session
    #[arg(long)]
    pub continue_on_error: bool,

    /// Reject chooser results that are not among the listed models
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the busy indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Report whether ollama and gum are installed and exit
    #[arg(long)]
    pub check_tools: bool,
}

impl Cli {
    /// Tracing filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_spinner(value: &str) -> Result<SpinnerBackend, String> {
    value.parse()
}
