//! Parse error type.

use crate::diag::Diagnostic;
use thiserror::Error;

/// A failed parse.
///
/// Carries every diagnostic the parser collected; the display message is
/// the first error rendered with its line/column against the source text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Build a parse error from collected diagnostics.
    pub(crate) fn from_diagnostics(source: &str, diagnostics: Vec<Diagnostic>) -> Self {
        let message = diagnostics
            .iter()
            .find(|d| d.is_error())
            .or(diagnostics.first())
            .map(|d| d.render(source))
            .unwrap_or_else(|| "parse failed".to_string());
        Self {
            message,
            diagnostics,
        }
    }

    /// All collected diagnostics, errors and warnings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
