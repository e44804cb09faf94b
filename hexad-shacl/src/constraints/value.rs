//! Value constraint validators: sh:hasValue, sh:in, and numeric ranges.

use super::ConstraintViolation;
use hexad_core::Term;

/// Validate sh:hasValue against the full value set.
pub fn validate_has_value(values: &[Term], expected: &Term) -> Option<ConstraintViolation> {
    if values.contains(expected) {
        None
    } else {
        Some(ConstraintViolation::of_set(format!(
            "required value {expected} is missing"
        )))
    }
}

/// Validate sh:in for one value.
pub fn validate_in(value: &Term, list: &[Term]) -> Option<ConstraintViolation> {
    if list.contains(value) {
        None
    } else {
        Some(ConstraintViolation::of_value(
            value,
            "value is not in the allowed list",
        ))
    }
}

/// Validate sh:minInclusive for one value.
pub fn validate_min_inclusive(value: &Term, min: f64) -> Option<ConstraintViolation> {
    check_numeric(value, |n| n >= min, || format!("value must be >= {min}"))
}

/// Validate sh:maxInclusive for one value.
pub fn validate_max_inclusive(value: &Term, max: f64) -> Option<ConstraintViolation> {
    check_numeric(value, |n| n <= max, || format!("value must be <= {max}"))
}

/// Validate sh:minExclusive for one value.
pub fn validate_min_exclusive(value: &Term, min: f64) -> Option<ConstraintViolation> {
    check_numeric(value, |n| n > min, || format!("value must be > {min}"))
}

/// Validate sh:maxExclusive for one value.
pub fn validate_max_exclusive(value: &Term, max: f64) -> Option<ConstraintViolation> {
    check_numeric(value, |n| n < max, || format!("value must be < {max}"))
}

/// Coerce the value numerically (the FILTER coercion) and test it.
/// Values that do not coerce violate the range constraint.
fn check_numeric(
    value: &Term,
    test: impl FnOnce(f64) -> bool,
    message: impl FnOnce() -> String,
) -> Option<ConstraintViolation> {
    match numeric(value) {
        Some(n) if test(n) => None,
        Some(_) => Some(ConstraintViolation::of_value(value, message())),
        None => Some(ConstraintViolation::of_value(value, "value is not numeric")),
    }
}

/// The FILTER numeric coercion: a literal's lexical form parsed as f64.
pub fn numeric(value: &Term) -> Option<f64> {
    value.as_literal().and_then(|lit| lit.numeric_value())
}
