//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of a locally available model
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
