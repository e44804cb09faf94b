//! Value-type constraint validators: sh:datatype, sh:class, sh:nodeKind.

use super::ConstraintViolation;
use crate::shape::NodeKind;
use hexad_core::{Graph, Iri, Term, TriplePattern};

/// Validate sh:datatype: the value must be a literal typed with `datatype`.
pub fn validate_datatype(value: &Term, datatype: &Iri) -> Option<ConstraintViolation> {
    match value {
        Term::Literal(lit) if lit.datatype() == Some(datatype) => None,
        _ => Some(ConstraintViolation::of_value(
            value,
            format!("value is not a literal of datatype {datatype}"),
        )),
    }
}

/// Validate sh:class: the value must be a direct instance of `class`.
///
/// Direct means a stored `value rdf:type class` triple; subclass inference
/// is out of scope.
pub fn validate_class(graph: &Graph, value: &Term, class: &Iri) -> Option<ConstraintViolation> {
    let Some(node) = value.as_node() else {
        return Some(ConstraintViolation::of_value(
            value,
            format!("literal cannot be an instance of {class}"),
        ));
    };

    let pattern = TriplePattern::any()
        .with_subject(node)
        .with_predicate(Iri::new_unchecked(hexad_vocab::rdf::TYPE))
        .with_object(Term::Iri(class.clone()));
    if graph.match_pattern(&pattern).is_empty() {
        Some(ConstraintViolation::of_value(
            value,
            format!("value is not an instance of {class}"),
        ))
    } else {
        None
    }
}

/// Validate sh:nodeKind: the value's term kind must match.
pub fn validate_node_kind(value: &Term, kind: NodeKind) -> Option<ConstraintViolation> {
    let matches = match kind {
        NodeKind::Iri => value.is_iri(),
        NodeKind::BlankNode => value.is_blank(),
        NodeKind::Literal => value.is_literal(),
        NodeKind::BlankNodeOrIri => value.is_blank() || value.is_iri(),
        NodeKind::BlankNodeOrLiteral => value.is_blank() || value.is_literal(),
        NodeKind::IriOrLiteral => value.is_iri() || value.is_literal(),
    };
    if matches {
        None
    } else {
        Some(ConstraintViolation::of_value(
            value,
            format!("term kind does not match {kind:?}"),
        ))
    }
}
