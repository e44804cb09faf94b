//! Pattern lookup input for the triple store.
//!
//! A `TriplePattern` is the keyword-argument style match request: any of the
//! three positions may be bound or left open. The store maps each of the
//! eight bound/unbound combinations to the cheapest index scan.

use crate::term::{Iri, Node, Term, Triple};

/// A match request against the store. Unbound positions are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Option<Node>,
    pub predicate: Option<Iri>,
    pub object: Option<Term>,
}

impl TriplePattern {
    /// A fully unbound pattern (matches every triple).
    pub fn any() -> Self {
        Self::default()
    }

    /// Bind the subject position.
    pub fn with_subject(mut self, subject: impl Into<Node>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Bind the predicate position.
    pub fn with_predicate(mut self, predicate: Iri) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Bind the object position.
    pub fn with_object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Whether every position is bound.
    pub fn is_fully_bound(&self) -> bool {
        self.subject.is_some() && self.predicate.is_some() && self.object.is_some()
    }

    /// Check a triple against the bound positions.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject.as_ref().map_or(true, |s| *s == triple.subject)
            && self
                .predicate
                .as_ref()
                .map_or(true, |p| *p == triple.predicate)
            && self.object.as_ref().map_or(true, |o| *o == triple.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    #[test]
    fn test_pattern_matches() {
        let t = Triple::new(
            iri("http://example.org/alice"),
            iri("http://example.org/name"),
            Literal::plain("Alice"),
        );

        assert!(TriplePattern::any().matches(&t));
        assert!(TriplePattern::any()
            .with_subject(iri("http://example.org/alice"))
            .matches(&t));
        assert!(!TriplePattern::any()
            .with_subject(iri("http://example.org/bob"))
            .matches(&t));
        assert!(TriplePattern::any()
            .with_predicate(iri("http://example.org/name"))
            .with_object(Literal::plain("Alice"))
            .matches(&t));
        assert!(!TriplePattern::any()
            .with_object(Literal::plain("Bob"))
            .matches(&t));
    }

    #[test]
    fn test_fully_bound() {
        let pattern = TriplePattern::any()
            .with_subject(iri("http://example.org/s"))
            .with_predicate(iri("http://example.org/p"))
            .with_object(iri("http://example.org/o"));
        assert!(pattern.is_fully_bound());
        assert!(!TriplePattern::any().is_fully_bound());
    }
}
