//! Model identifier value object and the model listing parser

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a locally available chat model (Value Object)
///
/// Opaque to the application: whatever the backend lists or the chooser
/// returns, e.g. `llama3:latest`. The only rule is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model identifier, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that this identifier is one of `offered`.
    pub fn ensure_offered(&self, offered: &[ModelId]) -> Result<(), DomainError> {
        if offered.contains(self) {
            Ok(())
        } else {
            Err(DomainError::ModelNotOffered(self.0.clone()))
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Parse the text table printed by a model listing command.
///
/// The first line is a header and is skipped. Every following line
/// contributes its first whitespace-delimited token; lines without one
/// are ignored. Order is preserved.
///
/// ```
/// use gumchat_domain::parse_model_list;
///
/// let output = "NAME            SIZE\nllama3:latest   4.7 GB\n";
/// let models = parse_model_list(output);
/// assert_eq!(models[0].as_str(), "llama3:latest");
/// ```
pub fn parse_model_list(output: &str) -> Vec<ModelId> {
    output
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(|token| ModelId(token.to_string()))
        .collect()
}
