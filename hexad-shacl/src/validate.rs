//! The SHACL validation engine.
//!
//! For each active shape: resolve targets to focus nodes, then evaluate
//! node-level constraints against the focus node and property-shape
//! constraints against the focus node's value sets. Cardinality,
//! sh:hasValue, sh:uniqueLang, and the property-pair constraints evaluate
//! once per value set; everything else evaluates per value. Logical
//! constraints recurse with each value as the sub-shape's focus node.
//!
//! Validation is total: malformed constraint inputs (an invalid regex)
//! produce a warning through `tracing` and no violation.

use crate::constraints::{
    cardinality, pair, string, value, value_type, Constraint, ConstraintViolation,
};
use crate::report::{ValidationReport, ValidationResult};
use crate::shape::{NodeShape, PropertyShape, Severity};
use crate::targets::resolve_targets;
use hexad_core::{Graph, Iri, Term, TriplePattern};
use tracing::warn;

/// Validate a store against a shape set.
pub fn validate(graph: &Graph, shapes: &[NodeShape]) -> ValidationReport {
    let mut results = Vec::new();
    for shape in shapes {
        if shape.deactivated {
            continue;
        }
        for focus in resolve_targets(graph, &shape.targets) {
            results.extend(validate_focus(graph, shape, &focus));
        }
    }
    ValidationReport::new(results)
}

/// Validate one focus node against one shape, targets already resolved.
fn validate_focus(graph: &Graph, shape: &NodeShape, focus: &Term) -> Vec<ValidationResult> {
    let mut results = Vec::new();

    // Node-level constraints see the focus node as a one-value set.
    let focus_values = vec![focus.clone()];
    let node_ctx = ResultContext {
        source_shape: &shape.id,
        path: None,
        message: shape.message.as_deref(),
        severity: shape.severity,
    };
    for constraint in &shape.constraints {
        apply_constraint(graph, constraint, focus, &focus_values, &node_ctx, &mut results);
    }

    for property in &shape.properties {
        let values = property_values(graph, focus, &property.path);
        let ctx = ResultContext {
            source_shape: property.id.as_ref().unwrap_or(&shape.id),
            path: Some(&property.path),
            message: property
                .message
                .as_deref()
                .or(shape.message.as_deref()),
            severity: property_severity(property, shape),
        };
        for constraint in &property.constraints {
            apply_constraint(graph, constraint, focus, &values, &ctx, &mut results);
        }
    }

    results
}

/// Reporting context shared by every result a constraint produces.
struct ResultContext<'a> {
    source_shape: &'a Iri,
    path: Option<&'a Iri>,
    message: Option<&'a str>,
    severity: Severity,
}

impl<'a> ResultContext<'a> {
    fn result(
        &self,
        focus: &Term,
        constraint: &Constraint,
        violation: ConstraintViolation,
    ) -> ValidationResult {
        ValidationResult {
            focus: focus.clone(),
            path: self.path.cloned(),
            value: violation.value,
            source_shape: self.source_shape.clone(),
            constraint_component: constraint.component().to_string(),
            message: self
                .message
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}: {}", constraint.description(), violation.message)),
            severity: self.severity,
        }
    }
}

/// A property shape inherits the node shape's severity unless it sets its
/// own non-default one.
fn property_severity(property: &PropertyShape, shape: &NodeShape) -> Severity {
    if property.severity == Severity::default() {
        shape.severity
    } else {
        property.severity
    }
}

/// The values of `path` at the focus node. Literal focus nodes have no
/// outgoing triples.
fn property_values(graph: &Graph, focus: &Term, path: &Iri) -> Vec<Term> {
    let Some(node) = focus.as_node() else {
        return Vec::new();
    };
    graph
        .match_pattern(
            &TriplePattern::any()
                .with_subject(node)
                .with_predicate(path.clone()),
        )
        .into_iter()
        .map(|t| t.object)
        .collect()
}

/// Evaluate one constraint, pushing any results.
fn apply_constraint(
    graph: &Graph,
    constraint: &Constraint,
    focus: &Term,
    values: &[Term],
    ctx: &ResultContext<'_>,
    results: &mut Vec<ValidationResult>,
) {
    let mut push = |violation: ConstraintViolation, results: &mut Vec<ValidationResult>| {
        results.push(ctx.result(focus, constraint, violation));
    };

    match constraint {
        // Per value set
        Constraint::MinCount(min) => {
            if let Some(v) = cardinality::validate_min_count(values, *min) {
                push(v, results);
            }
        }
        Constraint::MaxCount(max) => {
            if let Some(v) = cardinality::validate_max_count(values, *max) {
                push(v, results);
            }
        }
        Constraint::HasValue(expected) => {
            if let Some(v) = value::validate_has_value(values, expected) {
                push(v, results);
            }
        }
        Constraint::UniqueLang(enabled) => {
            if *enabled {
                if let Some(v) = string::validate_unique_lang(values) {
                    push(v, results);
                }
            }
        }
        Constraint::Equals(other)
        | Constraint::Disjoint(other)
        | Constraint::LessThan(other)
        | Constraint::LessThanOrEquals(other) => {
            let other_values = property_values(graph, focus, other);
            let violation = match constraint {
                Constraint::Equals(_) => pair::validate_equals(values, &other_values, other),
                Constraint::Disjoint(_) => pair::validate_disjoint(values, &other_values, other),
                Constraint::LessThan(_) => pair::validate_less_than(values, &other_values, other),
                Constraint::LessThanOrEquals(_) => {
                    pair::validate_less_than_or_equals(values, &other_values, other)
                }
                _ => None,
            };
            if let Some(v) = violation {
                push(v, results);
            }
        }

        // Per value
        Constraint::Datatype(dt) => {
            for v in values {
                if let Some(violation) = value_type::validate_datatype(v, dt) {
                    push(violation, results);
                }
            }
        }
        Constraint::Class(class) => {
            for v in values {
                if let Some(violation) = value_type::validate_class(graph, v, class) {
                    push(violation, results);
                }
            }
        }
        Constraint::NodeKind(kind) => {
            for v in values {
                if let Some(violation) = value_type::validate_node_kind(v, *kind) {
                    push(violation, results);
                }
            }
        }
        Constraint::MinLength(min) => {
            for v in values {
                if let Some(violation) = string::validate_min_length(v, *min) {
                    push(violation, results);
                }
            }
        }
        Constraint::MaxLength(max) => {
            for v in values {
                if let Some(violation) = string::validate_max_length(v, *max) {
                    push(violation, results);
                }
            }
        }
        Constraint::Pattern(pattern, flags) => {
            for v in values {
                match string::validate_pattern(v, pattern, flags.as_deref()) {
                    Ok(Some(violation)) => push(violation, results),
                    Ok(None) => {}
                    Err(err) => {
                        warn!(%err, "skipping sh:pattern constraint");
                        return;
                    }
                }
            }
        }
        Constraint::LanguageIn(langs) => {
            for v in values {
                if let Some(violation) = string::validate_language_in(v, langs) {
                    push(violation, results);
                }
            }
        }
        Constraint::In(list) => {
            for v in values {
                if let Some(violation) = value::validate_in(v, list) {
                    push(violation, results);
                }
            }
        }
        Constraint::MinInclusive(min) => {
            for v in values {
                if let Some(violation) = value::validate_min_inclusive(v, *min) {
                    push(violation, results);
                }
            }
        }
        Constraint::MaxInclusive(max) => {
            for v in values {
                if let Some(violation) = value::validate_max_inclusive(v, *max) {
                    push(violation, results);
                }
            }
        }
        Constraint::MinExclusive(min) => {
            for v in values {
                if let Some(violation) = value::validate_min_exclusive(v, *min) {
                    push(violation, results);
                }
            }
        }
        Constraint::MaxExclusive(max) => {
            for v in values {
                if let Some(violation) = value::validate_max_exclusive(v, *max) {
                    push(violation, results);
                }
            }
        }

        // Logical: recurse with each value as the sub-shape's focus
        Constraint::And(shapes) => {
            for v in values {
                for sub in shapes {
                    results.extend(validate_focus(graph, sub, v));
                }
            }
        }
        Constraint::Or(shapes) => {
            for v in values {
                let conforming = shapes
                    .iter()
                    .filter(|sub| subshape_conforms(graph, sub, v))
                    .count();
                if conforming == 0 {
                    push(
                        ConstraintViolation::of_value(v, "no alternative shape matched"),
                        results,
                    );
                }
            }
        }
        Constraint::Not(sub) => {
            for v in values {
                if subshape_conforms(graph, sub, v) {
                    push(
                        ConstraintViolation::of_value(v, "value matches the negated shape"),
                        results,
                    );
                }
            }
        }
        Constraint::Xone(shapes) => {
            for v in values {
                let conforming = shapes
                    .iter()
                    .filter(|sub| subshape_conforms(graph, sub, v))
                    .count();
                if conforming != 1 {
                    push(
                        ConstraintViolation::of_value(
                            v,
                            format!("{conforming} alternative shapes matched, expected exactly 1"),
                        ),
                        results,
                    );
                }
            }
        }
    }
}

/// Whether a focus node conforms to a sub-shape (no Violation-severity
/// results), ignoring the sub-shape's own targets.
fn subshape_conforms(graph: &Graph, shape: &NodeShape, focus: &Term) -> bool {
    !validate_focus(graph, shape, focus)
        .iter()
        .any(ValidationResult::is_violation)
}
