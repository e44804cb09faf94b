//! Error types for hexad-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// IRI contains whitespace or is otherwise malformed
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Literal carries both a datatype and a language tag
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Prefixed name references a prefix the registry does not know
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Input is not of the form `prefix:local`
    #[error("Invalid prefixed name: {0}")]
    InvalidPrefixedName(String),

    /// Term appeared in a position its kind does not allow
    #[error("Invalid term position: {0}")]
    InvalidTermPosition(String),
}

impl Error {
    /// Create an invalid IRI error
    pub fn invalid_iri(msg: impl Into<String>) -> Self {
        Error::InvalidIri(msg.into())
    }

    /// Create an invalid literal error
    pub fn invalid_literal(msg: impl Into<String>) -> Self {
        Error::InvalidLiteral(msg.into())
    }

    /// Create an unknown prefix error
    pub fn unknown_prefix(prefix: impl Into<String>) -> Self {
        Error::UnknownPrefix(prefix.into())
    }

    /// Create an invalid term position error
    pub fn invalid_term_position(msg: impl Into<String>) -> Self {
        Error::InvalidTermPosition(msg.into())
    }
}
