//! Error types for hexad-shacl.
//!
//! Validation itself never fails; these errors exist for constraint
//! evaluators whose inputs can be malformed (an invalid regex, for
//! instance). The engine converts them into warnings and skips the
//! constraint.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, ShaclError>;

/// SHACL evaluation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaclError {
    /// sh:pattern regex failed to compile
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The regex as written in the constraint
        pattern: String,
        /// The compiler's complaint
        message: String,
    },
}
