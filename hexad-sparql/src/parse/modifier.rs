//! Solution modifier parsing: LIMIT, OFFSET, ORDER BY in any order.

use crate::ast::{Direction, Modifiers, OrderKey};
use crate::lex::TokenKind;

impl<'a> super::Parser<'a> {
    /// Parse modifiers until a non-modifier token is reached.
    pub(super) fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::default();

        loop {
            if self.stream.match_keyword(TokenKind::KwLimit) {
                if let Some(n) = self.parse_non_negative("LIMIT") {
                    modifiers.limit = Some(n);
                }
            } else if self.stream.match_keyword(TokenKind::KwOffset) {
                if let Some(n) = self.parse_non_negative("OFFSET") {
                    modifiers.offset = Some(n);
                }
            } else if self.stream.check_keyword(TokenKind::KwOrder) {
                self.stream.advance();
                if !self.stream.match_keyword(TokenKind::KwBy) {
                    self.stream.error_at_current("expected BY after ORDER");
                    break;
                }
                self.parse_order_keys(&mut modifiers);
            } else {
                break;
            }
        }

        modifiers
    }

    /// Parse the variable list after ORDER BY; each variable takes an
    /// optional ASC or DESC.
    fn parse_order_keys(&mut self, modifiers: &mut Modifiers) {
        let mut any = false;
        while let Some((variable, _)) = self.stream.consume_var() {
            any = true;
            let direction = if self.stream.match_keyword(TokenKind::KwDesc) {
                Direction::Desc
            } else {
                self.stream.match_keyword(TokenKind::KwAsc);
                Direction::Asc
            };
            modifiers.order_by.push(OrderKey {
                variable,
                direction,
            });
        }
        if !any {
            self.stream.error_at_current("expected variable after ORDER BY");
        }
    }

    /// Parse a non-negative integer argument for LIMIT/OFFSET.
    fn parse_non_negative(&mut self, keyword: &str) -> Option<usize> {
        match self.stream.consume_integer() {
            Some((n, _)) if n >= 0 => Some(n as usize),
            Some((_, span)) => {
                self.stream.add_diagnostic(crate::diag::Diagnostic::new(
                    crate::diag::DiagCode::InvalidNumericLiteral,
                    format!("{keyword} must be non-negative"),
                    span,
                ));
                None
            }
            None => {
                self.stream
                    .error_at_current(&format!("expected integer after {keyword}"));
                None
            }
        }
    }
}
