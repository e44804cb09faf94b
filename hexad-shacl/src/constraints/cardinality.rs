//! Cardinality constraint validators.

use super::ConstraintViolation;
use hexad_core::Term;

/// Validate sh:minCount against the full value set.
pub fn validate_min_count(values: &[Term], min: usize) -> Option<ConstraintViolation> {
    if values.len() < min {
        Some(ConstraintViolation::of_set(format!(
            "found {} values, need at least {min}",
            values.len()
        )))
    } else {
        None
    }
}

/// Validate sh:maxCount against the full value set.
pub fn validate_max_count(values: &[Term], max: usize) -> Option<ConstraintViolation> {
    if values.len() > max {
        Some(ConstraintViolation::of_set(format!(
            "found {} values, allowed at most {max}",
            values.len()
        )))
    } else {
        None
    }
}
