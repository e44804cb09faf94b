//! Graph pattern algebra.
//!
//! Patterns are the execution input: prefixed names have already been
//! expanded, so every non-variable position holds a resolved term.

use super::expr::Expr;
use hexad_core::Term;
use std::sync::Arc;

/// A triple pattern position: a variable or a bound term.
///
/// Predicate variables are permitted; when a predicate position is bound it
/// always holds an IRI term.
#[derive(Clone, Debug, PartialEq)]
pub enum TermPattern {
    /// A variable, stored without its sigil
    Var(Arc<str>),
    /// A bound term
    Term(Term),
}

impl TermPattern {
    /// Create a variable position.
    pub fn var(name: impl AsRef<str>) -> Self {
        TermPattern::Var(Arc::from(name.as_ref()))
    }

    /// The variable name, if this position is a variable.
    pub fn as_var(&self) -> Option<&Arc<str>> {
        match self {
            TermPattern::Var(name) => Some(name),
            TermPattern::Term(_) => None,
        }
    }
}

impl From<Term> for TermPattern {
    fn from(term: Term) -> Self {
        TermPattern::Term(term)
    }
}

/// A triple pattern: three positions, each variable or bound.
#[derive(Clone, Debug, PartialEq)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
}

impl TriplePattern {
    /// Create a triple pattern.
    pub fn new(subject: TermPattern, predicate: TermPattern, object: TermPattern) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Collect the variable names used by this pattern into `out`.
    pub fn collect_variables(&self, out: &mut Vec<Arc<str>>) {
        for position in [&self.subject, &self.predicate, &self.object] {
            if let TermPattern::Var(name) = position {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
        }
    }
}

/// A graph pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// A triple pattern
    Triple(TriplePattern),
    /// `FILTER ( expr )`
    Filter(Expr),
    /// `OPTIONAL { patterns }`
    Optional(Vec<Pattern>),
    /// `{ left } UNION { right }`
    Union(Vec<Pattern>, Vec<Pattern>),
    /// A nested group `{ patterns }`
    Group(Vec<Pattern>),
}

impl Pattern {
    /// Collect the variable names bound or referenced anywhere in this
    /// pattern, in first-appearance order.
    ///
    /// This drives `SELECT *` projection.
    pub fn collect_variables(&self, out: &mut Vec<Arc<str>>) {
        match self {
            Pattern::Triple(tp) => tp.collect_variables(out),
            Pattern::Filter(expr) => expr.collect_variables(out),
            Pattern::Optional(patterns) | Pattern::Group(patterns) => {
                for p in patterns {
                    p.collect_variables(out);
                }
            }
            Pattern::Union(left, right) => {
                for p in left.iter().chain(right) {
                    p.collect_variables(out);
                }
            }
        }
    }
}

/// Collect the variables of a pattern list in first-appearance order.
pub fn pattern_variables(patterns: &[Pattern]) -> Vec<Arc<str>> {
    let mut out = Vec::new();
    for p in patterns {
        p.collect_variables(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{Iri, Literal};

    fn iri(s: &str) -> Term {
        Term::Iri(Iri::new(s).unwrap())
    }

    #[test]
    fn test_collect_variables_dedups_in_order() {
        let tp1 = TriplePattern::new(
            TermPattern::var("s"),
            iri("http://example.org/name").into(),
            TermPattern::var("n"),
        );
        let tp2 = TriplePattern::new(
            TermPattern::var("s"),
            iri("http://example.org/age").into(),
            TermPattern::var("a"),
        );

        let vars = pattern_variables(&[Pattern::Triple(tp1), Pattern::Triple(tp2)]);
        let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, vec!["s", "n", "a"]);
    }

    #[test]
    fn test_collect_variables_recurses_into_union_and_optional() {
        let left = vec![Pattern::Triple(TriplePattern::new(
            TermPattern::var("p"),
            iri("http://example.org/name").into(),
            Term::Literal(Literal::plain("Alice")).into(),
        ))];
        let right = vec![Pattern::Optional(vec![Pattern::Triple(TriplePattern::new(
            TermPattern::var("p"),
            iri("http://example.org/age").into(),
            TermPattern::var("age"),
        ))])];

        let vars = pattern_variables(&[Pattern::Union(left, right)]);
        let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, vec!["p", "age"]);
    }
}
