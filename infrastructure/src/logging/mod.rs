//! Structured conversation logging
//!
//! [`JsonlConversationLogger`] appends chat events to a JSONL file and
//! implements the [`ConversationLogger`](gumchat_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
