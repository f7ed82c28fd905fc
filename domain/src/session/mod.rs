//! Chat session domain.
//!
//! - [`entities::Conversation`]: the append-only message history of a session
//! - [`entities::Message`]: a single role-tagged turn
//! - [`input::UserInput`]: classification of a line typed at the prompt

pub mod entities;
pub mod input;
