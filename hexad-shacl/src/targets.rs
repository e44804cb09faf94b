//! Target resolution: from target selectors to focus nodes.

use crate::shape::Target;
use hexad_core::{Graph, Iri, Term, TriplePattern};

/// Resolve a shape's targets to its focus nodes.
///
/// The result is the de-duplicated union over all selectors, in
/// first-appearance order. Focus nodes are terms because
/// `sh:targetObjectsOf` can select literals.
pub fn resolve_targets(graph: &Graph, targets: &[Target]) -> Vec<Term> {
    let mut focus_nodes: Vec<Term> = Vec::new();
    let mut push = |term: Term, out: &mut Vec<Term>| {
        if !out.contains(&term) {
            out.push(term);
        }
    };

    for target in targets {
        match target {
            Target::Class(class) => {
                let pattern = TriplePattern::any()
                    .with_predicate(Iri::new_unchecked(hexad_vocab::rdf::TYPE))
                    .with_object(Term::Iri(class.clone()));
                for triple in graph.match_pattern(&pattern) {
                    push(Term::from(triple.subject), &mut focus_nodes);
                }
            }
            Target::Node(node) => {
                push(Term::from(node.clone()), &mut focus_nodes);
            }
            Target::SubjectsOf(predicate) => {
                let pattern = TriplePattern::any().with_predicate(predicate.clone());
                for triple in graph.match_pattern(&pattern) {
                    push(Term::from(triple.subject), &mut focus_nodes);
                }
            }
            Target::ObjectsOf(predicate) => {
                let pattern = TriplePattern::any().with_predicate(predicate.clone());
                for triple in graph.match_pattern(&pattern) {
                    push(triple.object, &mut focus_nodes);
                }
            }
        }
    }

    focus_nodes
}
