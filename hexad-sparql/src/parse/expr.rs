//! Filter expression parsing.
//!
//! Precedence, loosest first: `||`, `&&`, comparisons, `+`/`-`, `*`/`/`,
//! unary `!`, primaries. Comparison binds tighter than the logical
//! connectives; chains at one level associate left.

use crate::ast::{ArithOp, CmpOp, Expr, LogicOp};
use crate::lex::TokenKind;
use hexad_core::{Literal, Term};
use std::sync::Arc;

impl<'a> super::Parser<'a> {
    /// Parse a `FILTER ( expr )` constraint; the FILTER keyword has been
    /// consumed.
    pub(super) fn parse_filter_constraint(&mut self) -> Option<Expr> {
        if !self.stream.match_token(&TokenKind::LParen) {
            self.stream.error_at_current("expected '(' after FILTER");
            return None;
        }
        let expr = self.parse_expression()?;
        if !self.stream.match_token(&TokenKind::RParen) {
            self.stream.error_at_current("expected ')' to close FILTER");
            return None;
        }
        Some(expr)
    }

    /// Parse a full expression.
    pub(super) fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_or_expression()
    }

    fn parse_or_expression(&mut self) -> Option<Expr> {
        let first = self.parse_and_expression()?;
        if !self.stream.check(&TokenKind::Or) {
            return Some(first);
        }
        let mut args = vec![first];
        while self.stream.match_token(&TokenKind::Or) {
            args.push(self.parse_and_expression()?);
        }
        Some(Expr::Logic(LogicOp::Or, args))
    }

    fn parse_and_expression(&mut self) -> Option<Expr> {
        let first = self.parse_comparison()?;
        if !self.stream.check(&TokenKind::And) {
            return Some(first);
        }
        let mut args = vec![first];
        while self.stream.match_token(&TokenKind::And) {
            args.push(self.parse_comparison()?);
        }
        Some(Expr::Logic(LogicOp::And, args))
    }

    fn parse_comparison(&mut self) -> Option<Expr> {
        let mut expr = self.parse_additive()?;
        while let Some(op) = self.peek_cmp_op() {
            self.stream.advance();
            let right = self.parse_additive()?;
            expr = Expr::cmp(op, expr, right);
        }
        Some(expr)
    }

    fn peek_cmp_op(&self) -> Option<CmpOp> {
        match self.stream.peek().kind {
            TokenKind::Eq => Some(CmpOp::Eq),
            TokenKind::Ne => Some(CmpOp::Ne),
            TokenKind::Lt => Some(CmpOp::Lt),
            TokenKind::Le => Some(CmpOp::Le),
            TokenKind::Gt => Some(CmpOp::Gt),
            TokenKind::Ge => Some(CmpOp::Ge),
            _ => None,
        }
    }

    fn parse_additive(&mut self) -> Option<Expr> {
        let mut expr = self.parse_multiplicative()?;
        loop {
            let op = match self.stream.peek().kind {
                TokenKind::Plus => ArithOp::Add,
                TokenKind::Minus => ArithOp::Sub,
                _ => break,
            };
            self.stream.advance();
            let right = self.parse_multiplicative()?;
            expr = Expr::arith(op, expr, right);
        }
        Some(expr)
    }

    fn parse_multiplicative(&mut self) -> Option<Expr> {
        let mut expr = self.parse_unary()?;
        loop {
            let op = match self.stream.peek().kind {
                TokenKind::Star => ArithOp::Mul,
                TokenKind::Slash => ArithOp::Div,
                _ => break,
            };
            self.stream.advance();
            let right = self.parse_unary()?;
            expr = Expr::arith(op, expr, right);
        }
        Some(expr)
    }

    fn parse_unary(&mut self) -> Option<Expr> {
        if self.stream.match_token(&TokenKind::Bang) {
            let operand = self.parse_unary()?;
            return Some(Expr::Logic(LogicOp::Not, vec![operand]));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        if self.stream.match_token(&TokenKind::LParen) {
            let expr = self.parse_expression()?;
            if !self.stream.match_token(&TokenKind::RParen) {
                self.stream.error_at_current("expected ')'");
                return None;
            }
            return Some(expr);
        }

        if let Some((name, _)) = self.stream.consume_var() {
            return Some(Expr::Var(name));
        }

        // Built-in predicate functions lex as keywords.
        if let Some(name) = self.builtin_call_name() {
            self.stream.advance();
            let args = self.parse_call_args()?;
            return Some(Expr::Call(name, args));
        }

        if let Some((value, _)) = self.stream.consume_string() {
            let literal = self.parse_literal_suffix(value.as_ref());
            return Some(Expr::Const(Term::Literal(literal)));
        }

        match self.stream.peek().kind.clone() {
            TokenKind::Integer(n) => {
                self.stream.advance();
                Some(Expr::Const(Term::Literal(Literal::integer(n))))
            }
            TokenKind::Decimal(text) => {
                self.stream.advance();
                Some(Expr::Const(Term::Literal(Literal::typed(
                    text.as_ref(),
                    hexad_core::Iri::new_unchecked(hexad_vocab::xsd::DECIMAL),
                ))))
            }
            TokenKind::KwTrue => {
                self.stream.advance();
                Some(Expr::Const(Term::Literal(Literal::boolean(true))))
            }
            TokenKind::KwFalse => {
                self.stream.advance();
                Some(Expr::Const(Term::Literal(Literal::boolean(false))))
            }
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } => {
                let iri = self.parse_iri()?;
                // An IRI followed by an argument list is a function call.
                if self.stream.check(&TokenKind::LParen) {
                    let args = self.parse_call_args()?;
                    Some(Expr::Call(Arc::from(iri.as_str()), args))
                } else {
                    Some(Expr::Const(Term::Iri(iri)))
                }
            }
            _ => {
                self.stream.error_at_current("expected expression");
                None
            }
        }
    }

    /// The canonical name of a built-in call keyword at the cursor.
    fn builtin_call_name(&self) -> Option<Arc<str>> {
        let name = match self.stream.peek().kind {
            TokenKind::KwBound => "bound",
            TokenKind::KwIsIri => "isIRI",
            TokenKind::KwIsUri => "isURI",
            TokenKind::KwIsBlank => "isBlank",
            TokenKind::KwIsLiteral => "isLiteral",
            _ => return None,
        };
        Some(Arc::from(name))
    }

    /// Parse a parenthesized, comma-separated argument list.
    fn parse_call_args(&mut self) -> Option<Vec<Expr>> {
        if !self.stream.match_token(&TokenKind::LParen) {
            self.stream.error_at_current("expected '(' after function name");
            return None;
        }

        let mut args = Vec::new();
        if !self.stream.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.stream.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        if !self.stream.match_token(&TokenKind::RParen) {
            self.stream.error_at_current("expected ')' to close argument list");
            return None;
        }
        Some(args)
    }
}
