//! Token stream for parsing.
//!
//! Wraps the lexer output with lookahead, matching/consuming helpers, and
//! diagnostic collection.

use crate::diag::{DiagCode, Diagnostic};
use crate::lex::{Token, TokenKind};
use crate::span::SourceSpan;
use std::sync::Arc;

/// A stream of tokens with lookahead and diagnostics.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl TokenStream {
    /// Create a stream from lexer output. The token list always ends with EOF.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Take the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// Whether only EOF remains.
    pub fn is_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .expect("token stream always holds at least EOF")
    }

    /// The span of the current token.
    pub fn current_span(&self) -> SourceSpan {
        self.peek().span
    }

    /// The span of the previously consumed token.
    pub fn previous_span(&self) -> SourceSpan {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            SourceSpan::point(0)
        }
    }

    /// Advance past the current token (EOF is never consumed).
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Consume and return the current token.
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        self.advance();
        token
    }

    /// Whether the current token has the same kind (by discriminant).
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    /// Whether the current token is exactly the given keyword.
    pub fn check_keyword(&self, kw: TokenKind) -> bool {
        self.peek().kind == kw
    }

    /// Consume the current token if it matches by discriminant.
    pub fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is the given keyword.
    pub fn match_keyword(&mut self, kw: TokenKind) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Record an error diagnostic at the current token.
    ///
    /// The message is suffixed with the offending token text so callers see
    /// what was actually found.
    pub fn error_at_current(&mut self, message: &str) {
        let token = self.peek();
        let (code, rendered) = if token.is_eof() {
            (
                DiagCode::UnexpectedEof,
                format!("{message}, found end of input"),
            )
        } else {
            (
                DiagCode::ExpectedToken,
                format!("{message}, found '{}'", token.kind),
            )
        };
        let span = token.span;
        self.add_diagnostic(Diagnostic::new(code, rendered, span));
    }

    /// Consume a variable token, returning its name.
    pub fn consume_var(&mut self) -> Option<(Arc<str>, SourceSpan)> {
        if let TokenKind::Var(name) = &self.peek().kind {
            let name = name.clone();
            let span = self.peek().span;
            self.advance();
            Some((name, span))
        } else {
            None
        }
    }

    /// Consume a full-IRI token, returning its text.
    pub fn consume_iri(&mut self) -> Option<(Arc<str>, SourceSpan)> {
        if let TokenKind::Iri(iri) = &self.peek().kind {
            let iri = iri.clone();
            let span = self.peek().span;
            self.advance();
            Some((iri, span))
        } else {
            None
        }
    }

    /// Consume a prefixed-name token, returning prefix and local part.
    pub fn consume_prefixed_name(&mut self) -> Option<(Arc<str>, Arc<str>, SourceSpan)> {
        if let TokenKind::PrefixedName { prefix, local } = &self.peek().kind {
            let (prefix, local) = (prefix.clone(), local.clone());
            let span = self.peek().span;
            self.advance();
            Some((prefix, local, span))
        } else {
            None
        }
    }

    /// Consume a prefix-namespace token (`pfx:`), returning the prefix.
    pub fn consume_prefixed_name_ns(&mut self) -> Option<(Arc<str>, SourceSpan)> {
        if let TokenKind::PrefixedNameNs(prefix) = &self.peek().kind {
            let prefix = prefix.clone();
            let span = self.peek().span;
            self.advance();
            Some((prefix, span))
        } else {
            None
        }
    }

    /// Consume an integer token.
    pub fn consume_integer(&mut self) -> Option<(i64, SourceSpan)> {
        if let TokenKind::Integer(n) = self.peek().kind {
            let span = self.peek().span;
            self.advance();
            Some((n, span))
        } else {
            None
        }
    }

    /// Consume a string token, returning its unescaped content.
    pub fn consume_string(&mut self) -> Option<(Arc<str>, SourceSpan)> {
        if let TokenKind::String(s) = &self.peek().kind {
            let s = s.clone();
            let span = self.peek().span;
            self.advance();
            Some((s, span))
        } else {
            None
        }
    }

    /// Consume a language-tag token.
    pub fn consume_lang_tag(&mut self) -> Option<(Arc<str>, SourceSpan)> {
        if let TokenKind::LangTag(tag) = &self.peek().kind {
            let tag = tag.clone();
            let span = self.peek().span;
            self.advance();
            Some((tag, span))
        } else {
            None
        }
    }

    /// Whether the current token can start a triple-pattern term.
    pub fn is_term_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Var(_)
                | TokenKind::Iri(_)
                | TokenKind::PrefixedName { .. }
                | TokenKind::String(_)
                | TokenKind::Integer(_)
                | TokenKind::Decimal(_)
                | TokenKind::KwTrue
                | TokenKind::KwFalse
                | TokenKind::KwA
        )
    }
}
