//! Property-pair constraint validators: this path's values against
//! another path's values on the same focus node.

use super::value::numeric;
use super::ConstraintViolation;
use hexad_core::Term;

/// Validate sh:equals: the two value sets must be equal as term sets.
pub fn validate_equals(
    values: &[Term],
    other: &[Term],
    other_path: &hexad_core::Iri,
) -> Option<ConstraintViolation> {
    let missing_here = other.iter().find(|t| !values.contains(t));
    let missing_there = values.iter().find(|t| !other.contains(t));
    match (missing_here, missing_there) {
        (None, None) => None,
        _ => Some(ConstraintViolation::of_set(format!(
            "values differ from the values of {other_path}"
        ))),
    }
}

/// Validate sh:disjoint: the two value sets must not intersect.
pub fn validate_disjoint(
    values: &[Term],
    other: &[Term],
    other_path: &hexad_core::Iri,
) -> Option<ConstraintViolation> {
    match values.iter().find(|t| other.contains(t)) {
        Some(shared) => Some(ConstraintViolation::of_value(
            shared,
            format!("value is shared with {other_path}"),
        )),
        None => None,
    }
}

/// Validate sh:lessThan: every pair must compare numerically less.
pub fn validate_less_than(
    values: &[Term],
    other: &[Term],
    other_path: &hexad_core::Iri,
) -> Option<ConstraintViolation> {
    validate_pairwise(values, other, |a, b| a < b, other_path, "<")
}

/// Validate sh:lessThanOrEquals: every pair must compare numerically
/// at most.
pub fn validate_less_than_or_equals(
    values: &[Term],
    other: &[Term],
    other_path: &hexad_core::Iri,
) -> Option<ConstraintViolation> {
    validate_pairwise(values, other, |a, b| a <= b, other_path, "<=")
}

fn validate_pairwise(
    values: &[Term],
    other: &[Term],
    test: impl Fn(f64, f64) -> bool,
    other_path: &hexad_core::Iri,
    op: &str,
) -> Option<ConstraintViolation> {
    for value in values {
        let Some(a) = numeric(value) else {
            return Some(ConstraintViolation::of_value(value, "value is not numeric"));
        };
        for other_value in other {
            let Some(b) = numeric(other_value) else {
                return Some(ConstraintViolation::of_value(
                    other_value,
                    format!("value of {other_path} is not numeric"),
                ));
            };
            if !test(a, b) {
                return Some(ConstraintViolation::of_value(
                    value,
                    format!("value is not {op} every value of {other_path}"),
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{Iri, Literal};

    fn int(n: i64) -> Term {
        Term::Literal(Literal::integer(n))
    }

    fn path() -> Iri {
        Iri::new("http://example.org/other").unwrap()
    }

    #[test]
    fn test_equals() {
        assert!(validate_equals(&[int(1), int(2)], &[int(2), int(1)], &path()).is_none());
        assert!(validate_equals(&[int(1)], &[int(1), int(2)], &path()).is_some());
        assert!(validate_equals(&[int(1), int(2)], &[int(1)], &path()).is_some());
        assert!(validate_equals(&[], &[], &path()).is_none());
    }

    #[test]
    fn test_disjoint() {
        assert!(validate_disjoint(&[int(1)], &[int(2)], &path()).is_none());
        assert!(validate_disjoint(&[int(1), int(2)], &[int(2)], &path()).is_some());
        assert!(validate_disjoint(&[], &[int(1)], &path()).is_none());
    }

    #[test]
    fn test_less_than() {
        assert!(validate_less_than(&[int(1), int(2)], &[int(3), int(4)], &path()).is_none());
        assert!(validate_less_than(&[int(3)], &[int(3)], &path()).is_some());
        assert!(validate_less_than_or_equals(&[int(3)], &[int(3)], &path()).is_none());
        assert!(validate_less_than_or_equals(&[int(4)], &[int(3)], &path()).is_some());
    }

    #[test]
    fn test_non_numeric_pair_is_violation() {
        let name = Term::Literal(Literal::plain("Alice"));
        assert!(validate_less_than(&[name], &[int(3)], &path()).is_some());
        assert!(
            validate_less_than(&[int(1)], &[Term::Literal(Literal::plain("x"))], &path())
                .is_some()
        );
    }
}
