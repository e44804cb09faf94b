//! Structured parse diagnostics.
//!
//! The parser collects diagnostics rather than failing on the first
//! problem; `S0xx` codes are syntax errors, `W0xx` codes are warnings the
//! query can execute with.

use crate::span::{LineIndex, SourceSpan};
use serde::{Deserialize, Serialize};

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The query cannot be executed
    Error,
    /// The query can execute but may not mean what was written
    Warning,
}

/// Stable diagnostic codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiagCode {
    /// Expected a specific token
    #[serde(rename = "S001")]
    ExpectedToken,

    /// Unexpected end of input
    #[serde(rename = "S002")]
    UnexpectedEof,

    /// String literal not terminated, bad escape, or other lexical problem
    #[serde(rename = "S003")]
    LexError,

    /// Unknown query form
    #[serde(rename = "S004")]
    UnknownQueryForm,

    /// Numeric literal out of range
    #[serde(rename = "S005")]
    InvalidNumericLiteral,

    /// Prefixed name uses a prefix with no PREFIX declaration
    #[serde(rename = "W001")]
    UndeclaredPrefix,
}

impl DiagCode {
    /// The string code (e.g. "S001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpectedToken => "S001",
            Self::UnexpectedEof => "S002",
            Self::LexError => "S003",
            Self::UnknownQueryForm => "S004",
            Self::InvalidNumericLiteral => "S005",
            Self::UndeclaredPrefix => "W001",
        }
    }

    /// The severity this code carries.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UndeclaredPrefix => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for DiagCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A diagnostic message from the parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code
    pub code: DiagCode,
    /// Severity level
    pub severity: Severity,
    /// One-sentence message
    pub message: String,
    /// Source location
    pub span: SourceSpan,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default severity.
    pub fn new(code: DiagCode, message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            span,
        }
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render as `CODE at line:col: message` against the source text.
    pub fn render(&self, source: &str) -> String {
        let pos = LineIndex::new(source).line_col(self.span.start);
        format!("{} at {}: {}", self.code, pos, self.message)
    }
}

/// Result of a parse: the AST (when parsing got far enough) plus every
/// diagnostic collected along the way.
#[derive(Debug)]
pub struct ParseOutput<T> {
    /// The parsed value, if one could be produced
    pub ast: Option<T>,
    /// Collected diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParseOutput<T> {
    /// A parse that produced a value and diagnostics.
    pub fn new(ast: Option<T>, diagnostics: Vec<Diagnostic>) -> Self {
        Self { ast, diagnostics }
    }

    /// Whether any collected diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// The warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}
