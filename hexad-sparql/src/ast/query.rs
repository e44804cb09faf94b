//! Top-level query algebra: the four query forms and their modifiers.

use super::pattern::{Pattern, TriplePattern};
use hexad_core::Iri;
use std::sync::Arc;

/// A parsed SPARQL query.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    Select(SelectQuery),
    Construct(ConstructQuery),
    Ask(AskQuery),
    Describe(DescribeQuery),
}

/// A SELECT query.
///
/// `variables` is the resolved projection: for `SELECT *` the parser
/// substitutes every variable appearing anywhere in the WHERE clause, in
/// first-appearance order.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectQuery {
    /// Projected variable names
    pub variables: Vec<Arc<str>>,
    /// WHERE clause patterns
    pub patterns: Vec<Pattern>,
    /// Solution modifiers
    pub modifiers: Modifiers,
    /// Whether DISTINCT was specified
    pub distinct: bool,
}

/// A CONSTRUCT query.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructQuery {
    /// Template triple patterns to instantiate per solution
    pub template: Vec<TriplePattern>,
    /// WHERE clause patterns
    pub patterns: Vec<Pattern>,
    /// Solution modifiers
    pub modifiers: Modifiers,
}

/// An ASK query.
#[derive(Clone, Debug, PartialEq)]
pub struct AskQuery {
    /// WHERE clause patterns
    pub patterns: Vec<Pattern>,
}

/// A DESCRIBE query.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeQuery {
    /// The resources to describe: variables and/or IRIs
    pub resources: Vec<VarOrIri>,
    /// Optional WHERE clause binding the listed variables
    pub patterns: Option<Vec<Pattern>>,
}

/// A variable or an IRI in a DESCRIBE resource list.
#[derive(Clone, Debug, PartialEq)]
pub enum VarOrIri {
    Var(Arc<str>),
    Iri(Iri),
}

/// Solution modifiers: ORDER BY, OFFSET, LIMIT.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifiers {
    /// ORDER BY keys, primary first
    pub order_by: Vec<OrderKey>,
    /// OFFSET: number of leading solutions to drop
    pub offset: Option<usize>,
    /// LIMIT: maximum number of solutions to keep
    pub limit: Option<usize>,
}

impl Modifiers {
    /// Whether no modifier is set.
    pub fn is_empty(&self) -> bool {
        self.order_by.is_empty() && self.offset.is_none() && self.limit.is_none()
    }
}

/// A single ORDER BY key.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderKey {
    /// The variable to order by
    pub variable: Arc<str>,
    /// Sort direction
    pub direction: Direction,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_default_empty() {
        let m = Modifiers::default();
        assert!(m.is_empty());

        let m = Modifiers {
            limit: Some(10),
            ..Modifiers::default()
        };
        assert!(!m.is_empty());
    }
}
