//! Term parsing: IRIs, prefixed names, literals, and variables inside
//! triple patterns.

use crate::ast::TermPattern;
use crate::diag::{DiagCode, Diagnostic};
use crate::lex::TokenKind;
use crate::span::SourceSpan;
use hexad_core::{Iri, Literal, Term};

impl<'a> super::Parser<'a> {
    /// Resolve a prefixed name against the declared PREFIX bindings.
    ///
    /// An undeclared prefix resolves to the raw `prefix:local` text and
    /// emits a warning, so the query still parses; whether that IRI matches
    /// anything is the data's problem.
    pub(super) fn resolve_prefixed(
        &mut self,
        prefix: &str,
        local: &str,
        span: SourceSpan,
    ) -> Iri {
        match self.prefixes.namespace(prefix) {
            Some(namespace) => match Iri::new(format!("{namespace}{local}")) {
                Ok(iri) => iri,
                Err(_) => {
                    self.stream.add_diagnostic(Diagnostic::new(
                        DiagCode::ExpectedToken,
                        format!("prefix '{prefix}:' expands to an invalid IRI"),
                        span,
                    ));
                    Iri::new_unchecked(format!("{prefix}:{local}"))
                }
            },
            None => {
                self.stream.add_diagnostic(Diagnostic::new(
                    DiagCode::UndeclaredPrefix,
                    format!("prefix '{prefix}:' has no PREFIX declaration"),
                    span,
                ));
                // Token characters exclude whitespace, so this cannot fail
                // validation; keep the raw text as written.
                Iri::new_unchecked(format!("{prefix}:{local}"))
            }
        }
    }

    /// Parse an IRI in either `<...>` or prefixed form.
    pub(super) fn parse_iri(&mut self) -> Option<Iri> {
        if let Some((iri, span)) = self.stream.consume_iri() {
            return match Iri::new(iri.as_ref()) {
                Ok(iri) => Some(iri),
                Err(err) => {
                    self.stream
                        .add_diagnostic(Diagnostic::new(DiagCode::ExpectedToken, err.to_string(), span));
                    None
                }
            };
        }
        if let Some((prefix, local, span)) = self.stream.consume_prefixed_name() {
            return Some(self.resolve_prefixed(&prefix, &local, span));
        }
        None
    }

    /// Parse a subject or object position: a variable or a term.
    pub(super) fn parse_term_pattern(&mut self) -> Option<TermPattern> {
        if let Some((name, _)) = self.stream.consume_var() {
            return Some(TermPattern::Var(name));
        }

        if let Some(iri) = self.parse_iri() {
            return Some(TermPattern::Term(Term::Iri(iri)));
        }

        if let Some((value, _)) = self.stream.consume_string() {
            return Some(TermPattern::Term(Term::Literal(
                self.parse_literal_suffix(value.as_ref()),
            )));
        }

        match self.stream.peek().kind.clone() {
            TokenKind::Integer(n) => {
                self.stream.advance();
                Some(TermPattern::Term(Term::Literal(Literal::integer(n))))
            }
            TokenKind::Decimal(text) => {
                self.stream.advance();
                Some(TermPattern::Term(Term::Literal(Literal::typed(
                    text.as_ref(),
                    Iri::new_unchecked(hexad_vocab::xsd::DECIMAL),
                ))))
            }
            TokenKind::KwTrue => {
                self.stream.advance();
                Some(TermPattern::Term(Term::Literal(Literal::boolean(true))))
            }
            TokenKind::KwFalse => {
                self.stream.advance();
                Some(TermPattern::Term(Term::Literal(Literal::boolean(false))))
            }
            _ => {
                self.stream.error_at_current("expected term");
                None
            }
        }
    }

    /// Parse the optional language tag or `^^datatype` after a string.
    pub(super) fn parse_literal_suffix(&mut self, value: &str) -> Literal {
        if let Some((tag, _)) = self.stream.consume_lang_tag() {
            return Literal::lang_tagged(value, tag.as_ref());
        }
        if self.stream.match_token(&TokenKind::DoubleCaret) {
            if let Some(datatype) = self.parse_iri() {
                return Literal::typed(value, datatype);
            }
            self.stream.error_at_current("expected datatype IRI after '^^'");
        }
        Literal::plain(value)
    }

    /// Parse a predicate position: `a`, a variable, or an IRI.
    pub(super) fn parse_verb(&mut self) -> Option<TermPattern> {
        if self.stream.match_keyword(TokenKind::KwA) {
            return Some(TermPattern::Term(Term::Iri(Iri::new_unchecked(
                hexad_vocab::rdf::TYPE,
            ))));
        }
        if let Some((name, _)) = self.stream.consume_var() {
            return Some(TermPattern::Var(name));
        }
        if let Some(iri) = self.parse_iri() {
            return Some(TermPattern::Term(Term::Iri(iri)));
        }
        self.stream.error_at_current("expected predicate");
        None
    }
}
