//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, user-recoverable failures (input
/// validation, business rules). Presentation I/O concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more input fields failed validation. All violations for a
    /// single submission are collected before reporting.
    #[error("invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A candidate entry collides with an existing one.
    #[error("duplicate entry: {0}")]
    Duplicate(String),

    /// An action that requires a selection was triggered without one.
    #[error("no selection: {0}")]
    NoSelection(String),
}

impl DomainError {
    pub fn validation(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Validation(messages.into_iter().map(Into::into).collect())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn no_selection(msg: impl Into<String>) -> Self {
        Self::NoSelection(msg.into())
    }
}
