//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod discover_models;
pub mod run_chat;
pub mod run_session;
pub mod save_transcript;
pub mod select_model;

#[cfg(test)]
pub(crate) mod test_support;
