//! Application layer for gumchat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ApiErrorPolicy, ChatBehavior, SpinnerBackend};
pub use ports::{
    busy_indicator::{BusyGuard, BusyIndicator, NoBusyIndicator},
    chat_gateway::{ChatGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_catalog::{CatalogError, ModelCatalog},
    session_notifier::{NoSessionNotifier, SessionNotifier},
    terminal_ui::{TerminalUi, UiError},
    transcript_store::{StoreError, TranscriptStore},
};
pub use use_cases::discover_models::DiscoverModelsUseCase;
pub use use_cases::run_chat::{ChatOutcome, RunChatUseCase, Termination};
pub use use_cases::run_session::{RunSessionInput, RunSessionUseCase, SessionReport};
pub use use_cases::save_transcript::{SaveOutcome, SaveTranscriptUseCase};
pub use use_cases::select_model::SelectModelUseCase;
