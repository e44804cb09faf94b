//! Filter expression algebra.

use hexad_core::Term;
use std::sync::Arc;

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Logical connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Not,
}

/// Arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A variable reference
    Var(Arc<str>),
    /// A constant term
    Const(Term),
    /// Comparison of two operands
    Cmp(CmpOp, Box<Expr>, Box<Expr>),
    /// Logical connective; `Not` takes exactly one argument
    Logic(LogicOp, Vec<Expr>),
    /// Function call: built-ins `bound`, `isIRI`/`isURI`, `isLiteral`,
    /// `isBlank`; anything else evaluates false with a warning
    Call(Arc<str>, Vec<Expr>),
    /// Arithmetic over numerically coerced operands
    Arith(ArithOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Create a variable expression.
    pub fn var(name: impl AsRef<str>) -> Self {
        Expr::Var(Arc::from(name.as_ref()))
    }

    /// Create a comparison expression.
    pub fn cmp(op: CmpOp, left: Expr, right: Expr) -> Self {
        Expr::Cmp(op, Box::new(left), Box::new(right))
    }

    /// Create an arithmetic expression.
    pub fn arith(op: ArithOp, left: Expr, right: Expr) -> Self {
        Expr::Arith(op, Box::new(left), Box::new(right))
    }

    /// Collect variable names referenced by this expression into `out`.
    pub fn collect_variables(&self, out: &mut Vec<Arc<str>>) {
        match self {
            Expr::Var(name) => {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
            Expr::Const(_) => {}
            Expr::Cmp(_, left, right) | Expr::Arith(_, left, right) => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
            Expr::Logic(_, args) | Expr::Call(_, args) => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_variables() {
        let expr = Expr::Logic(
            LogicOp::And,
            vec![
                Expr::cmp(CmpOp::Gt, Expr::var("age"), Expr::var("min")),
                Expr::Call(Arc::from("bound"), vec![Expr::var("age")]),
            ],
        );
        let mut vars = Vec::new();
        expr.collect_variables(&mut vars);
        let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, vec!["age", "min"]);
    }
}
