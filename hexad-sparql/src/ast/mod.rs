//! Query algebra produced by the parser and consumed by the executor.

mod expr;
mod pattern;
mod query;

pub use expr::{ArithOp, CmpOp, Expr, LogicOp};
pub use pattern::{pattern_variables, Pattern, TermPattern, TriplePattern};
pub use query::{
    AskQuery, ConstructQuery, DescribeQuery, Direction, Modifiers, OrderKey, Query, SelectQuery,
    VarOrIri,
};
