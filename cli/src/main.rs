//! CLI entrypoint for gumchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use gumchat_application::{
    ApiErrorPolicy, BusyIndicator, ConversationLogger, DiscoverModelsUseCase, NoBusyIndicator,
    NoConversationLogger, RunChatUseCase, RunSessionInput, RunSessionUseCase,
    SaveTranscriptUseCase, SelectModelUseCase, SessionNotifier, SpinnerBackend, TerminalUi,
    UiError,
};
use gumchat_domain::ModelId;
use gumchat_infrastructure::ollama::host::resolve_host;
use gumchat_infrastructure::{
    ConfigLoader, FileConfig, GumSpinner, GumTerminal, JsonlConversationLogger,
    MarkdownTranscriptStore, OllamaChatGateway, OllamaCliCatalog, check_tools,
    is_command_available, missing_tools,
};
use gumchat_presentation::{Cli, ConsoleNotifier, IndicatifSpinner};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli);

    info!("Starting gumchat");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    if cli.check_tools {
        print_tool_report();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }
    debug!("Loaded config: {:?}", config);

    ConsoleNotifier::set_color(config.ui.color);
    let notifier = ConsoleNotifier;

    if !is_command_available(&config.ui.command) {
        notifier.on_ui_error(&UiError::ToolNotFound(config.ui.command.clone()));
    }

    let preselected = cli.model.as_deref().map(ModelId::new).transpose()?;

    // === Dependency Injection ===
    let host = resolve_host(
        cli.host.as_deref().or(config.ollama.host.as_deref()),
        std::env::var("OLLAMA_HOST").ok().as_deref(),
    );
    info!("Ollama host: {}", host);
    let gateway = Arc::new(OllamaChatGateway::new(&host, config.ollama.timeout())?);

    let ui: Arc<dyn TerminalUi> = Arc::new(GumTerminal::with_program(&config.ui.command));
    let busy = busy_indicator(&cli, &config);
    let logger = conversation_logger(&config);

    let storage = cli
        .storage
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.transcript.directory));
    let store = Arc::new(MarkdownTranscriptStore::new(storage));

    let mut behavior = config.chat.to_behavior(&config.ui.placeholder);
    if cli.continue_on_error {
        behavior = behavior.with_api_error_policy(ApiErrorPolicy::Continue);
    }
    let strict = cli.strict || behavior.strict_selection;

    let use_case = RunSessionUseCase::new(
        DiscoverModelsUseCase::new(Arc::new(OllamaCliCatalog::with_program(
            &config.ollama.command,
        ))),
        SelectModelUseCase::new(ui.clone()).with_strict_selection(strict),
        RunChatUseCase::new(gateway, ui.clone(), busy)
            .with_behavior(behavior)
            .with_logger(logger),
        SaveTranscriptUseCase::new(ui, store),
    );

    let mut input = RunSessionInput::new();
    if let Some(model) = preselected {
        input = input.with_model(model);
    }

    let report = use_case.execute(input, &notifier).await;
    info!(
        "Session finished: model={:?}, termination={:?}, save={:?}",
        report.model.as_ref().map(ModelId::as_str),
        report.chat.as_ref().map(|chat| &chat.termination),
        report.save
    );

    Ok(())
}

/// Install the tracing subscriber; the returned guard flushes the log file.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = EnvFilter::new(cli.log_level());

    match &cli.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("gumchat.log"));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn busy_indicator(cli: &Cli, config: &FileConfig) -> Arc<dyn BusyIndicator> {
    if cli.quiet {
        return Arc::new(NoBusyIndicator);
    }

    match cli.spinner.unwrap_or(config.ui.spinner) {
        SpinnerBackend::Gum => Arc::new(
            GumSpinner::with_program(&config.ui.command).with_style(&config.ui.spinner_style),
        ),
        SpinnerBackend::Indicatif => Arc::new(IndicatifSpinner::new()),
    }
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    }
}

fn print_tool_report() {
    let statuses = check_tools(&[("ollama", "model listing"), ("gum", "terminal UI")]);

    println!("External tools:");
    for status in &statuses {
        println!("{}", status.describe());
    }

    let missing = missing_tools(&statuses);
    if missing.is_empty() {
        println!("All tools found.");
    } else {
        println!("Missing: {}", missing.join(", "));
    }
}
