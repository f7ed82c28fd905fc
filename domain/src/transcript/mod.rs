//! Markdown transcript rendering
//!
//! A transcript is a one-way export of a [`Conversation`]: every message
//! becomes a block
//!
//! ```text
//! **User**:
//!
//! <content>
//!
//! ---
//!
//! ```

use crate::session::entities::{Conversation, Message};

/// Render one message as a transcript block.
pub fn render_message(message: &Message) -> String {
    format!(
        "**{}**:\n\n{}\n\n---\n\n",
        message.role().display_name(),
        message.content()
    )
}

/// Render a whole conversation, messages in order.
pub fn render_transcript(conversation: &Conversation) -> String {
    conversation.messages().iter().map(render_message).collect()
}
