//! Error types for type registration.

use thiserror::Error;

/// Errors that occur when registering introspection type entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),
}
