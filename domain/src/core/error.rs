//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid model: {0:?}")]
    InvalidModel(String),

    #[error("Model {0} was not among the offered models")]
    ModelNotOffered(String),
}
