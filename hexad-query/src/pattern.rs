//! Triple-pattern evaluation against the store.
//!
//! For each incoming solution the pattern's variables are substituted with
//! their bound terms, the store is consulted through its index-selecting
//! `match_pattern`, and each matched triple extends the solution with new
//! bindings. A repeated variable inside one pattern (e.g. `?x ?p ?x`)
//! extends consistently or not at all.

use crate::solution::Solution;
use hexad_core::{Graph, Term, Triple};
use hexad_sparql::ast::{TermPattern, TriplePattern};

/// Evaluate one triple pattern over a set of solutions.
pub fn step_triple(graph: &Graph, pattern: &TriplePattern, solutions: Vec<Solution>) -> Vec<Solution> {
    let mut out = Vec::new();
    for sigma in solutions {
        let Some(lookup) = build_lookup(pattern, &sigma) else {
            // A bound variable holds a term that cannot occupy this
            // position (e.g. a literal subject); no triple can match.
            continue;
        };
        for triple in graph.match_pattern(&lookup) {
            if let Some(extended) = extend(&sigma, pattern, &triple) {
                out.push(extended);
            }
        }
    }
    out
}

/// Substitute bound variables into the pattern, producing the store lookup.
///
/// Returns `None` when a substituted term cannot legally occupy its
/// position, which makes the pattern unsatisfiable for this solution.
fn build_lookup(
    pattern: &TriplePattern,
    sigma: &Solution,
) -> Option<hexad_core::TriplePattern> {
    let mut lookup = hexad_core::TriplePattern::any();

    if let Some(term) = resolved(&pattern.subject, sigma) {
        lookup.subject = Some(term.as_node()?);
    }
    if let Some(term) = resolved(&pattern.predicate, sigma) {
        lookup.predicate = Some(term.as_iri()?.clone());
    }
    if let Some(term) = resolved(&pattern.object, sigma) {
        lookup.object = Some(term.clone());
    }

    Some(lookup)
}

/// The term a position resolves to under the solution, if any.
fn resolved<'a>(position: &'a TermPattern, sigma: &'a Solution) -> Option<&'a Term> {
    match position {
        TermPattern::Term(term) => Some(term),
        TermPattern::Var(name) => sigma.get(name),
    }
}

/// Extend a solution with the bindings a matched triple induces.
///
/// Returns `None` on an inconsistent re-binding.
fn extend(sigma: &Solution, pattern: &TriplePattern, triple: &Triple) -> Option<Solution> {
    let mut extended = sigma.clone();

    if let TermPattern::Var(name) = &pattern.subject {
        if !extended.try_bind(name, Term::from(triple.subject.clone())) {
            return None;
        }
    }
    if let TermPattern::Var(name) = &pattern.predicate {
        if !extended.try_bind(name, Term::Iri(triple.predicate.clone())) {
            return None;
        }
    }
    if let TermPattern::Var(name) = &pattern.object {
        if !extended.try_bind(name, triple.object.clone()) {
            return None;
        }
    }

    Some(extended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{Iri, Literal};
    use hexad_sparql::ast::TermPattern;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn graph() -> Graph {
        let mut g = Graph::new();
        let alice = iri("http://example.org/alice");
        let bob = iri("http://example.org/bob");
        let name = iri("http://example.org/name");
        let knows = iri("http://example.org/knows");
        g.insert(Triple::new(alice.clone(), name.clone(), Literal::plain("Alice")));
        g.insert(Triple::new(bob.clone(), name, Literal::plain("Bob")));
        g.insert(Triple::new(alice, knows, bob));
        g
    }

    #[test]
    fn test_step_binds_variables() {
        let g = graph();
        let pattern = TriplePattern::new(
            TermPattern::var("p"),
            TermPattern::Term(Term::Iri(iri("http://example.org/name"))),
            TermPattern::var("n"),
        );

        let result = step_triple(&g, &pattern, vec![Solution::new()]);
        assert_eq!(result.len(), 2);
        for sol in &result {
            assert!(sol.is_bound("p"));
            assert!(sol.is_bound("n"));
        }
    }

    #[test]
    fn test_step_respects_prior_bindings() {
        let g = graph();
        let mut seed = Solution::new();
        seed.bind(
            "p".into(),
            Term::Iri(iri("http://example.org/alice")),
        );

        let pattern = TriplePattern::new(
            TermPattern::var("p"),
            TermPattern::Term(Term::Iri(iri("http://example.org/name"))),
            TermPattern::var("n"),
        );

        let result = step_triple(&g, &pattern, vec![seed]);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].get("n"),
            Some(&Term::Literal(Literal::plain("Alice")))
        );
    }

    #[test]
    fn test_literal_bound_subject_is_unsatisfiable() {
        let g = graph();
        let mut seed = Solution::new();
        seed.bind("s".into(), Term::Literal(Literal::plain("Alice")));

        let pattern = TriplePattern::new(
            TermPattern::var("s"),
            TermPattern::var("p"),
            TermPattern::var("o"),
        );

        let result = step_triple(&g, &pattern, vec![seed]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_repeated_variable_must_agree() {
        let mut g = Graph::new();
        let loves = iri("http://example.org/loves");
        let narcissus = iri("http://example.org/narcissus");
        let echo = iri("http://example.org/echo");
        g.insert(Triple::new(narcissus.clone(), loves.clone(), narcissus.clone()));
        g.insert(Triple::new(echo, loves.clone(), narcissus));

        let pattern = TriplePattern::new(
            TermPattern::var("x"),
            TermPattern::Term(Term::Iri(loves)),
            TermPattern::var("x"),
        );

        let result = step_triple(&g, &pattern, vec![Solution::new()]);
        assert_eq!(result.len(), 1);
    }
}
