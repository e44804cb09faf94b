//! Graph pattern parsing: group patterns, triple blocks, FILTER, OPTIONAL,
//! and UNION.

use crate::ast::{Pattern, TriplePattern};
use crate::lex::TokenKind;

impl<'a> super::Parser<'a> {
    /// Parse a brace-delimited group: `{ patterns }`.
    ///
    /// The opening brace has not been consumed yet.
    pub(super) fn parse_braced_group(&mut self) -> Option<Vec<Pattern>> {
        if !self.stream.match_token(&TokenKind::LBrace) {
            self.stream.error_at_current("expected '{'");
            return None;
        }
        self.parse_group_contents()
    }

    /// Parse group contents up to and including the closing brace.
    pub(super) fn parse_group_contents(&mut self) -> Option<Vec<Pattern>> {
        let mut patterns: Vec<Pattern> = Vec::new();

        while !self.stream.check(&TokenKind::RBrace) && !self.stream.is_eof() {
            if self.stream.check_keyword(TokenKind::KwOptional) {
                self.stream.advance();
                let inner = self.parse_braced_group()?;
                patterns.push(Pattern::Optional(inner));
            } else if self.stream.check_keyword(TokenKind::KwFilter) {
                self.stream.advance();
                if let Some(expr) = self.parse_filter_constraint() {
                    patterns.push(Pattern::Filter(expr));
                }
            } else if self.stream.check_keyword(TokenKind::KwUnion) {
                self.stream.error_at_current("UNION must follow a group");
                self.stream.advance();
            } else if self.stream.check(&TokenKind::LBrace) {
                let inner = self.parse_braced_group()?;
                if self.stream.check_keyword(TokenKind::KwUnion) {
                    patterns.push(self.parse_union_continuation(inner)?);
                } else {
                    patterns.push(Pattern::Group(inner));
                }
            } else if self.stream.is_term_start() {
                self.parse_triples_block(&mut patterns)?;
            } else if self.stream.check(&TokenKind::Dot) {
                self.stream.advance();
            } else {
                self.stream.error_at_current("unexpected token in graph pattern");
                return None;
            }
        }

        if !self.stream.match_token(&TokenKind::RBrace) {
            self.stream.error_at_current("expected '}'");
            return None;
        }

        Some(patterns)
    }

    /// Parse `UNION { ... }` continuations after a completed group.
    ///
    /// Chained unions nest to the left: `A UNION B UNION C` becomes
    /// `Union(Union(A, B), C)`.
    fn parse_union_continuation(&mut self, left: Vec<Pattern>) -> Option<Pattern> {
        let mut result = left;
        let mut union: Option<Pattern> = None;

        while self.stream.match_keyword(TokenKind::KwUnion) {
            let right = self.parse_braced_group()?;
            union = Some(match union.take() {
                None => Pattern::Union(std::mem::take(&mut result), right),
                Some(prev) => Pattern::Union(vec![prev], right),
            });
        }

        union
    }

    /// Parse a block of triple patterns sharing `;` and `,` list syntax,
    /// appending one `Pattern::Triple` per expanded triple.
    pub(super) fn parse_triples_block(&mut self, patterns: &mut Vec<Pattern>) -> Option<()> {
        let subject = self.parse_term_pattern()?;

        loop {
            let predicate = self.parse_verb()?;

            // Object list: `o1, o2, ...` shares subject and predicate.
            loop {
                let object = self.parse_term_pattern()?;
                patterns.push(Pattern::Triple(TriplePattern::new(
                    subject.clone(),
                    predicate.clone(),
                    object,
                )));
                if !self.stream.match_token(&TokenKind::Comma) {
                    break;
                }
            }

            // `;` continues with the same subject and a new predicate; a
            // dangling `;` before `.` or `}` is tolerated.
            if self.stream.match_token(&TokenKind::Semicolon) {
                if self.stream.check(&TokenKind::Dot)
                    || self.stream.check(&TokenKind::RBrace)
                    || self.stream.is_eof()
                {
                    break;
                }
                continue;
            }
            break;
        }

        // Optional terminating dot.
        self.stream.match_token(&TokenKind::Dot);
        Some(())
    }
}
