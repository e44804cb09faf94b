//! Left outer join for OPTIONAL patterns.

use crate::execute::evaluate;
use crate::solution::Solution;
use hexad_core::Graph;
use hexad_sparql::ast::Pattern;

/// Evaluate `OPTIONAL { patterns }` over a set of solutions.
///
/// The optional group is evaluated once from the empty seed; each incoming
/// solution is then joined against the compatible subset. A solution with
/// no compatible partner survives unchanged, which is what makes the join
/// *left outer*.
pub fn step_optional(
    graph: &Graph,
    patterns: &[Pattern],
    solutions: Vec<Solution>,
) -> Vec<Solution> {
    let optional = evaluate(graph, patterns);

    let mut out = Vec::new();
    for sigma in solutions {
        let mut matched = false;
        for tau in &optional {
            if sigma.is_compatible(tau) {
                out.push(sigma.merge(tau));
                matched = true;
            }
        }
        if !matched {
            out.push(sigma);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{Iri, Literal, Term, Triple};
    use hexad_sparql::ast::{TermPattern, TriplePattern};

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn age_graph() -> Graph {
        let mut g = Graph::new();
        g.insert(Triple::new(
            iri("http://example.org/alice"),
            iri("http://example.org/age"),
            Literal::integer(30),
        ));
        g
    }

    fn age_pattern() -> Vec<Pattern> {
        vec![Pattern::Triple(TriplePattern::new(
            TermPattern::var("p"),
            TermPattern::Term(Term::Iri(iri("http://example.org/age"))),
            TermPattern::var("a"),
        ))]
    }

    #[test]
    fn test_match_extends_and_no_match_survives() {
        let g = age_graph();

        let mut with_age = Solution::new();
        with_age.bind("p".into(), Term::Iri(iri("http://example.org/alice")));
        let mut without_age = Solution::new();
        without_age.bind("p".into(), Term::Iri(iri("http://example.org/bob")));

        let result = step_optional(&g, &age_pattern(), vec![with_age, without_age.clone()]);
        assert_eq!(result.len(), 2);

        let alice = result
            .iter()
            .find(|s| {
                s.get("p").map(|t| t.to_string())
                    == Some("<http://example.org/alice>".to_string())
            })
            .unwrap();
        assert_eq!(alice.get("a"), Some(&Term::Literal(Literal::integer(30))));

        let bob = result
            .iter()
            .find(|s| {
                s.get("p").map(|t| t.to_string()) == Some("<http://example.org/bob>".to_string())
            })
            .unwrap();
        assert!(!bob.is_bound("a"));
        assert_eq!(bob, &without_age);
    }

    #[test]
    fn test_empty_optional_group_keeps_input() {
        let g = Graph::new();
        let mut sigma = Solution::new();
        sigma.bind("p".into(), Term::Iri(iri("http://example.org/alice")));

        let result = step_optional(&g, &age_pattern(), vec![sigma.clone()]);
        assert_eq!(result, vec![sigma]);
    }
}
