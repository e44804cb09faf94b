//! String constraint validators: length, pattern, language.
//!
//! String constraints evaluate literal values only; non-literal values
//! pass them.

use super::ConstraintViolation;
use crate::error::{Result, ShaclError};
use hexad_core::Term;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Validate sh:minLength on the literal's lexical form (code points).
pub fn validate_min_length(value: &Term, min: usize) -> Option<ConstraintViolation> {
    let len = lexical_length(value)?;
    if len < min {
        Some(ConstraintViolation::of_value(
            value,
            format!("length {len} is less than minimum {min}"),
        ))
    } else {
        None
    }
}

/// Validate sh:maxLength on the literal's lexical form (code points).
pub fn validate_max_length(value: &Term, max: usize) -> Option<ConstraintViolation> {
    let len = lexical_length(value)?;
    if len > max {
        Some(ConstraintViolation::of_value(
            value,
            format!("length {len} exceeds maximum {max}"),
        ))
    } else {
        None
    }
}

/// The lexical length of a literal value; `None` for non-literals, which
/// pass string constraints.
fn lexical_length(value: &Term) -> Option<usize> {
    value.as_literal().map(|lit| lit.value().chars().count())
}

/// Validate sh:pattern.
///
/// XPath-style flags translate to an inline group: `i`, `m`, `s`, `x` are
/// honored, anything else is ignored. An invalid regex is an error the
/// engine downgrades to a warning.
pub fn validate_pattern(
    value: &Term,
    pattern: &str,
    flags: Option<&str>,
) -> Result<Option<ConstraintViolation>> {
    let Some(lit) = value.as_literal() else {
        return Ok(None);
    };

    let regex_pattern = match flags {
        Some(f) => {
            let mut prefix = String::from("(?");
            for c in f.chars() {
                if matches!(c, 'i' | 'm' | 's' | 'x') {
                    prefix.push(c);
                }
            }
            if prefix.len() == 2 {
                pattern.to_string()
            } else {
                prefix.push(')');
                format!("{prefix}{pattern}")
            }
        }
        None => pattern.to_string(),
    };

    let regex = Regex::new(&regex_pattern).map_err(|e| ShaclError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    if regex.is_match(lit.value()) {
        Ok(None)
    } else {
        Ok(Some(ConstraintViolation::of_value(
            value,
            format!("value '{}' does not match pattern '{pattern}'", lit.value()),
        )))
    }
}

/// Validate sh:languageIn: a language-tagged literal's tag must be in the
/// set. Literals without a tag (and non-literals) pass.
pub fn validate_language_in(value: &Term, langs: &[String]) -> Option<ConstraintViolation> {
    let tag = value.as_literal().and_then(|lit| lit.language())?;
    if langs.iter().any(|l| l.eq_ignore_ascii_case(tag)) {
        None
    } else {
        Some(ConstraintViolation::of_value(
            value,
            format!("language tag '{tag}' is not in {langs:?}"),
        ))
    }
}

/// Validate sh:uniqueLang against the full value set: no language tag may
/// appear on more than one value.
pub fn validate_unique_lang(values: &[Term]) -> Option<ConstraintViolation> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for value in values {
        if let Some(tag) = value.as_literal().and_then(|lit| lit.language()) {
            if !seen.insert(tag) {
                return Some(ConstraintViolation::of_value(
                    value,
                    format!("language tag '{tag}' appears more than once"),
                ));
            }
        }
    }
    None
}
