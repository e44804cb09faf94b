//! Validation report and per-result records.

use crate::shape::Severity;
use hexad_core::{Iri, Term};

/// One validation result: a focus node failing one constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    /// The node under validation
    pub focus: Term,
    /// The property path, when the result came from a property shape
    pub path: Option<Iri>,
    /// The offending value, for per-value constraints
    pub value: Option<Term>,
    /// The shape that produced the result
    pub source_shape: Iri,
    /// The IRI of the violated constraint component
    pub constraint_component: String,
    /// The shape's custom message, or the constraint's default
    pub message: String,
    /// Severity inherited from the shape
    pub severity: Severity,
}

impl ValidationResult {
    /// Whether this result blocks conformance.
    pub fn is_violation(&self) -> bool {
        self.severity == Severity::Violation
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {} on {}", self.severity, self.message, self.focus)?;
        if let Some(path) = &self.path {
            write!(f, " (path {path})")?;
        }
        if let Some(value) = &self.value {
            write!(f, " (value {value})")?;
        }
        Ok(())
    }
}

/// The outcome of validating a store against a shape set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Build a report from collected results.
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// Conformance: true when no result has Violation severity. Warning
    /// and Info results do not block conformance.
    pub fn conforms(&self) -> bool {
        !self.results.iter().any(ValidationResult::is_violation)
    }

    /// All results, ordered as produced.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Only the Violation-severity results.
    pub fn violations(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| r.is_violation())
    }

    /// Number of results of any severity.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report carries no results at all.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::Iri;

    fn result(severity: Severity) -> ValidationResult {
        ValidationResult {
            focus: Term::Iri(Iri::new("http://example.org/x").unwrap()),
            path: None,
            value: None,
            source_shape: Iri::new("http://example.org/Shape").unwrap(),
            constraint_component: hexad_vocab::shacl::MIN_COUNT.to_string(),
            message: "missing value".to_string(),
            severity,
        }
    }

    #[test]
    fn test_conforms_ignores_non_violations() {
        assert!(ValidationReport::new(vec![]).conforms());
        assert!(ValidationReport::new(vec![result(Severity::Warning)]).conforms());
        assert!(ValidationReport::new(vec![result(Severity::Info)]).conforms());
        assert!(!ValidationReport::new(vec![
            result(Severity::Warning),
            result(Severity::Violation)
        ])
        .conforms());
    }

    #[test]
    fn test_violations_filter() {
        let report = ValidationReport::new(vec![
            result(Severity::Warning),
            result(Severity::Violation),
            result(Severity::Violation),
        ]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.violations().count(), 2);
    }
}
