//! FILTER expression evaluation.
//!
//! Expressions evaluate in two modes: *truthy* (does the solution pass?)
//! and *value* (what does the operand denote?). Equality compares terms
//! structurally; the ordering comparisons and arithmetic coerce operands to
//! 64-bit floats via the literal's lexical form, and fail the filter when
//! coercion fails. Unknown function calls evaluate false with a warning.

use crate::solution::Solution;
use hexad_core::Term;
use hexad_sparql::ast::{ArithOp, CmpOp, Expr, LogicOp};
use tracing::warn;

/// What an expression operand denotes under a solution.
#[derive(Clone, Debug, PartialEq)]
enum Value {
    /// A bound RDF term
    Term(Term),
    /// A number produced by arithmetic
    Number(f64),
}

impl Value {
    /// Numeric coercion: literals parse their lexical form, numbers pass
    /// through, IRIs and blank nodes do not coerce.
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Term(Term::Literal(lit)) => lit.numeric_value(),
            Value::Term(_) => None,
        }
    }
}

/// Keep only the solutions the expression accepts.
pub fn step_filter(expr: &Expr, solutions: Vec<Solution>) -> Vec<Solution> {
    solutions
        .into_iter()
        .filter(|sigma| eval_truthy(expr, sigma))
        .collect()
}

/// Evaluate an expression for boolean intent.
pub fn eval_truthy(expr: &Expr, sigma: &Solution) -> bool {
    match expr {
        // A bare variable is truthy iff bound; its value is not consulted.
        Expr::Var(name) => sigma.is_bound(name),
        Expr::Const(_) => true,
        Expr::Cmp(op, left, right) => eval_cmp(*op, left, right, sigma),
        Expr::Logic(LogicOp::And, args) => args.iter().all(|a| eval_truthy(a, sigma)),
        Expr::Logic(LogicOp::Or, args) => args.iter().any(|a| eval_truthy(a, sigma)),
        Expr::Logic(LogicOp::Not, args) => match args.as_slice() {
            [inner] => !eval_truthy(inner, sigma),
            _ => false,
        },
        Expr::Call(name, args) => eval_call(name, args, sigma),
        // Arithmetic in boolean position is truthy when it evaluates
        Expr::Arith(..) => eval_value(expr, sigma).is_some(),
    }
}

/// Resolve an operand to a value, if it has one under this solution.
fn eval_value(expr: &Expr, sigma: &Solution) -> Option<Value> {
    match expr {
        Expr::Var(name) => sigma.get(name).cloned().map(Value::Term),
        Expr::Const(term) => Some(Value::Term(term.clone())),
        Expr::Arith(op, left, right) => {
            let l = eval_value(left, sigma)?.as_number()?;
            let r = eval_value(right, sigma)?.as_number()?;
            let result = match op {
                ArithOp::Add => l + r,
                ArithOp::Sub => l - r,
                ArithOp::Mul => l * r,
                ArithOp::Div => {
                    if r == 0.0 {
                        return None;
                    }
                    l / r
                }
            };
            Some(Value::Number(result))
        }
        // Boolean-valued forms have no operand value
        Expr::Cmp(..) | Expr::Logic(..) | Expr::Call(..) => None,
    }
}

fn eval_cmp(op: CmpOp, left: &Expr, right: &Expr, sigma: &Solution) -> bool {
    let (Some(l), Some(r)) = (eval_value(left, sigma), eval_value(right, sigma)) else {
        // An unbound operand fails the filter.
        return false;
    };

    match op {
        CmpOp::Eq | CmpOp::Ne => {
            let equal = match (&l, &r) {
                (Value::Term(a), Value::Term(b)) => a == b,
                // Arithmetic results compare numerically
                _ => match (l.as_number(), r.as_number()) {
                    (Some(a), Some(b)) => a == b,
                    _ => return false,
                },
            };
            if op == CmpOp::Eq {
                equal
            } else {
                !equal
            }
        }
        CmpOp::Lt | CmpOp::Le | CmpOp::Gt | CmpOp::Ge => {
            let (Some(a), Some(b)) = (l.as_number(), r.as_number()) else {
                return false;
            };
            match op {
                CmpOp::Lt => a < b,
                CmpOp::Le => a <= b,
                CmpOp::Gt => a > b,
                CmpOp::Ge => a >= b,
                CmpOp::Eq | CmpOp::Ne => unreachable!(),
            }
        }
    }
}

fn eval_call(name: &str, args: &[Expr], sigma: &Solution) -> bool {
    match name.to_ascii_lowercase().as_str() {
        "bound" => match args {
            [Expr::Var(var)] => sigma.is_bound(var),
            _ => false,
        },
        "isiri" | "isuri" => arg_term(args, sigma).map_or(false, |t| t.is_iri()),
        "isliteral" => arg_term(args, sigma).map_or(false, |t| t.is_literal()),
        "isblank" => arg_term(args, sigma).map_or(false, |t| t.is_blank()),
        other => {
            warn!(function = other, "unknown filter function, evaluating false");
            false
        }
    }
}

/// The term value of a single-argument call, if resolvable.
fn arg_term(args: &[Expr], sigma: &Solution) -> Option<Term> {
    match args {
        [arg] => match eval_value(arg, sigma)? {
            Value::Term(term) => Some(term),
            Value::Number(_) => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{BlankNode, Iri, Literal};
    use hexad_sparql::ast::Expr;
    use std::sync::Arc;

    fn sol(bindings: &[(&str, Term)]) -> Solution {
        let mut s = Solution::new();
        for (name, term) in bindings {
            s.bind(Arc::from(*name), term.clone());
        }
        s
    }

    fn int(n: i64) -> Term {
        Term::Literal(Literal::integer(n))
    }

    #[test]
    fn test_var_truthy_iff_bound() {
        let s = sol(&[("x", int(0))]);
        assert!(eval_truthy(&Expr::var("x"), &s));
        assert!(!eval_truthy(&Expr::var("y"), &s));
    }

    #[test]
    fn test_const_always_truthy() {
        let s = Solution::new();
        assert!(eval_truthy(&Expr::Const(Term::Literal(Literal::boolean(false))), &s));
    }

    #[test]
    fn test_numeric_comparisons() {
        let s = sol(&[("a", int(30))]);
        let gt = Expr::cmp(CmpOp::Gt, Expr::var("a"), Expr::Const(int(28)));
        assert!(eval_truthy(&gt, &s));

        let lt = Expr::cmp(CmpOp::Lt, Expr::var("a"), Expr::Const(int(28)));
        assert!(!eval_truthy(&lt, &s));

        let le = Expr::cmp(CmpOp::Le, Expr::var("a"), Expr::Const(int(30)));
        assert!(eval_truthy(&le, &s));
    }

    #[test]
    fn test_unbound_operand_fails() {
        let s = Solution::new();
        let cmp = Expr::cmp(CmpOp::Gt, Expr::var("missing"), Expr::Const(int(1)));
        assert!(!eval_truthy(&cmp, &s));
    }

    #[test]
    fn test_non_numeric_ordering_fails() {
        let s = sol(&[("a", Term::Literal(Literal::plain("thirty")))]);
        let cmp = Expr::cmp(CmpOp::Gt, Expr::var("a"), Expr::Const(int(1)));
        assert!(!eval_truthy(&cmp, &s));
    }

    #[test]
    fn test_equality_is_term_equality() {
        let s = sol(&[("a", int(30))]);
        // "30" plain is a different term from "30"^^xsd:integer
        let eq_plain = Expr::cmp(
            CmpOp::Eq,
            Expr::var("a"),
            Expr::Const(Term::Literal(Literal::plain("30"))),
        );
        assert!(!eval_truthy(&eq_plain, &s));

        let eq_typed = Expr::cmp(CmpOp::Eq, Expr::var("a"), Expr::Const(int(30)));
        assert!(eval_truthy(&eq_typed, &s));

        let ne = Expr::cmp(CmpOp::Ne, Expr::var("a"), Expr::Const(int(31)));
        assert!(eval_truthy(&ne, &s));
    }

    #[test]
    fn test_logic_short_circuit() {
        let s = sol(&[("a", int(5))]);
        let t = Expr::cmp(CmpOp::Eq, Expr::var("a"), Expr::Const(int(5)));
        let f = Expr::cmp(CmpOp::Eq, Expr::var("a"), Expr::Const(int(6)));

        assert!(eval_truthy(&Expr::Logic(LogicOp::And, vec![t.clone(), t.clone()]), &s));
        assert!(!eval_truthy(&Expr::Logic(LogicOp::And, vec![t.clone(), f.clone()]), &s));
        assert!(eval_truthy(&Expr::Logic(LogicOp::Or, vec![f.clone(), t.clone()]), &s));
        assert!(!eval_truthy(&Expr::Logic(LogicOp::Or, vec![f.clone(), f.clone()]), &s));
        assert!(eval_truthy(&Expr::Logic(LogicOp::Not, vec![f]), &s));
        assert!(!eval_truthy(&Expr::Logic(LogicOp::Not, vec![t]), &s));
    }

    #[test]
    fn test_type_check_builtins() {
        let s = sol(&[
        ("i", Term::Iri(Iri::new("http://example.org/x").unwrap())),
            ("l", Term::Literal(Literal::plain("lit"))),
            ("b", Term::BlankNode(BlankNode::new("b0"))),
        ]);

        let call = |name: &str, var: &str| {
            Expr::Call(Arc::from(name), vec![Expr::var(var)])
        };

        assert!(eval_truthy(&call("isIRI", "i"), &s));
        assert!(eval_truthy(&call("isURI", "i"), &s));
        assert!(!eval_truthy(&call("isIRI", "l"), &s));
        assert!(eval_truthy(&call("isLiteral", "l"), &s));
        assert!(eval_truthy(&call("isBlank", "b"), &s));
        assert!(!eval_truthy(&call("isBlank", "i"), &s));
        assert!(eval_truthy(&call("bound", "i"), &s));
        assert!(!eval_truthy(&call("bound", "nope"), &s));
    }

    #[test]
    fn test_unknown_function_is_false() {
        let s = sol(&[("x", int(1))]);
        let call = Expr::Call(Arc::from("mystery"), vec![Expr::var("x")]);
        assert!(!eval_truthy(&call, &s));
    }

    #[test]
    fn test_arithmetic_in_comparison() {
        let s = sol(&[("a", int(10))]);
        // ?a + 5 > 14
        let expr = Expr::cmp(
            CmpOp::Gt,
            Expr::arith(ArithOp::Add, Expr::var("a"), Expr::Const(int(5))),
            Expr::Const(int(14)),
        );
        assert!(eval_truthy(&expr, &s));

        // ?a / 0 fails the filter
        let div = Expr::cmp(
            CmpOp::Gt,
            Expr::arith(ArithOp::Div, Expr::var("a"), Expr::Const(int(0))),
            Expr::Const(int(0)),
        );
        assert!(!eval_truthy(&div, &s));
    }

    #[test]
    fn test_step_filter() {
        let pass = sol(&[("a", int(30))]);
        let fail = sol(&[("a", int(10))]);
        let expr = Expr::cmp(CmpOp::Gt, Expr::var("a"), Expr::Const(int(20)));

        let kept = step_filter(&expr, vec![pass.clone(), fail]);
        assert_eq!(kept, vec![pass]);
    }
}
