//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod busy_indicator;
pub mod chat_gateway;
pub mod conversation_logger;
pub mod model_catalog;
pub mod session_notifier;
pub mod terminal_ui;
pub mod transcript_store;
