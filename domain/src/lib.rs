//! Domain layer for gumchat
//!
//! This crate contains the core entities and value objects of a chat
//! session. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Model identifier**: opaque name of a locally available backend
//! - **Conversation**: ordered, append-only list of role-tagged turns
//! - **Transcript**: the Markdown rendering of a Conversation

pub mod core;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    model::{ModelId, parse_model_list},
};
pub use session::{
    entities::{Conversation, Message, Role},
    input::UserInput,
};
pub use transcript::{render_message, render_transcript};
