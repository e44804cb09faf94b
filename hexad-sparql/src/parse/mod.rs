//! Recursive-descent SPARQL parser.
//!
//! The parser consumes tokens (not raw text) and produces the resolved
//! query algebra: PREFIX declarations are applied while parsing, so the
//! output contains only full IRIs and variables.

mod expr;
mod modifier;
mod pattern;
mod query;
mod stream;
mod term;

pub use stream::TokenStream;

use crate::ast::Query;
use crate::diag::{DiagCode, Diagnostic, ParseOutput};
use crate::error::ParseError;
use crate::lex::{tokenize, TokenKind};
use hexad_core::PrefixRegistry;

/// Parse a SPARQL query, failing on the first collected error.
///
/// The error message carries the offending token text and its line/column.
pub fn parse(input: &str) -> Result<Query, ParseError> {
    let output = parse_with_diagnostics(input);
    match output.ast {
        Some(ast) if !output.has_errors() => Ok(ast),
        _ => Err(ParseError::from_diagnostics(input, output.diagnostics)),
    }
}

/// Parse a SPARQL query, returning the AST (when one could be produced)
/// together with every collected diagnostic, warnings included.
pub fn parse_with_diagnostics(input: &str) -> ParseOutput<Query> {
    let tokens = tokenize(input);

    // Surface lexer errors before parsing; the parser assumes clean tokens.
    let lex_diagnostics: Vec<Diagnostic> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Error(msg) => {
                Some(Diagnostic::new(DiagCode::LexError, msg.to_string(), t.span))
            }
            _ => None,
        })
        .collect();
    if !lex_diagnostics.is_empty() {
        return ParseOutput::new(None, lex_diagnostics);
    }

    let mut stream = TokenStream::new(tokens);
    let ast = Parser::new(&mut stream).parse_query();
    ParseOutput::new(ast, stream.take_diagnostics())
}

/// The SPARQL parser.
///
/// Holds the token stream and the prefix bindings declared in the prologue.
struct Parser<'a> {
    stream: &'a mut TokenStream,
    prefixes: PrefixRegistry,
}

impl<'a> Parser<'a> {
    fn new(stream: &'a mut TokenStream) -> Self {
        Self {
            stream,
            prefixes: PrefixRegistry::new(),
        }
    }
}
