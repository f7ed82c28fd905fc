//! Classification of prompt input

/// Keywords that end the conversation loop, compared case-insensitively
/// after trimming.
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// What a line typed at the prompt means for the conversation loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// An exit keyword; nothing is recorded
    Exit,
    /// Anything else, trimmed of surrounding whitespace
    Message(String),
}

impl UserInput {
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if EXIT_KEYWORDS.contains(&text.to_lowercase().as_str()) {
            UserInput::Exit
        } else {
            UserInput::Message(text.to_string())
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, UserInput::Exit)
    }
}
