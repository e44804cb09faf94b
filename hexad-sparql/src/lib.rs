//! SPARQL front end for the hexad engine.
//!
//! Text goes in, resolved query algebra comes out:
//!
//! ```
//! use hexad_sparql::{parse, ast::Query};
//!
//! let query = parse("SELECT ?n WHERE { ?p <http://example.org/name> ?n }").unwrap();
//! assert!(matches!(query, Query::Select(_)));
//! ```
//!
//! The pipeline is a winnow-based tokenizer ([`lex`]), a recursive-descent
//! parser ([`parse`]) that applies PREFIX declarations while parsing, and
//! the query algebra ([`ast`]) consumed by the executor. Parse problems are
//! collected as spanned [`diag::Diagnostic`]s with stable codes.

pub mod ast;
pub mod diag;
pub mod lex;
pub mod parse;
pub mod span;

mod error;

pub use error::ParseError;
pub use parse::{parse, parse_with_diagnostics};
