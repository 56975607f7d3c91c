//! Error types for recap-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when user input for a deck or card is rejected.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Deck title is required.")]
    MissingTitle,

    #[error("Front and Back are required.")]
    MissingSide,
}
