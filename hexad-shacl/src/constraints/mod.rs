//! SHACL constraint types and per-family validators.
//!
//! Each family lives in its own module; validators return
//! `Option<ConstraintViolation>` (or a `Result` where the constraint's own
//! input can be malformed, as with regexes).

pub mod cardinality;
pub mod pair;
pub mod string;
pub mod value;
pub mod value_type;

use crate::shape::{NodeKind, NodeShape};
use hexad_core::{Iri, Term};

/// A SHACL constraint.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    // Cardinality (per value set)
    /// sh:minCount - at least this many values
    MinCount(usize),
    /// sh:maxCount - at most this many values
    MaxCount(usize),

    // Value type (per value)
    /// sh:datatype - value must be a literal typed with this datatype
    Datatype(Iri),
    /// sh:class - value must be a direct instance of this class
    Class(Iri),
    /// sh:nodeKind - value's term kind must match
    NodeKind(NodeKind),

    // String (per value; non-literals pass)
    /// sh:minLength - lexical form length in code points
    MinLength(usize),
    /// sh:maxLength - lexical form length in code points
    MaxLength(usize),
    /// sh:pattern with optional XPath-style flags
    Pattern(String, Option<String>),
    /// sh:languageIn - language tag must be one of these
    LanguageIn(Vec<String>),
    /// sh:uniqueLang - no language tag may repeat across the value set
    UniqueLang(bool),

    // Set membership
    /// sh:hasValue - the value set must contain this term
    HasValue(Term),
    /// sh:in - each value must be one of these terms
    In(Vec<Term>),

    // Numeric range (per value, FILTER-style coercion)
    /// sh:minInclusive
    MinInclusive(f64),
    /// sh:maxInclusive
    MaxInclusive(f64),
    /// sh:minExclusive
    MinExclusive(f64),
    /// sh:maxExclusive
    MaxExclusive(f64),

    // Property pair (this path's values vs. another path's values)
    /// sh:equals - the two value sets must be equal
    Equals(Iri),
    /// sh:disjoint - the two value sets must not intersect
    Disjoint(Iri),
    /// sh:lessThan - every pair must compare numerically less
    LessThan(Iri),
    /// sh:lessThanOrEquals - every pair must compare numerically at most
    LessThanOrEquals(Iri),

    // Logical (compose shapes against the focus node)
    /// sh:and - every sub-shape must conform
    And(Vec<NodeShape>),
    /// sh:or - at least one sub-shape must conform
    Or(Vec<NodeShape>),
    /// sh:not - the sub-shape must not conform
    Not(Box<NodeShape>),
    /// sh:xone - exactly one sub-shape must conform
    Xone(Vec<NodeShape>),
}

impl Constraint {
    /// The IRI of this constraint's component, for result reporting.
    pub fn component(&self) -> &'static str {
        use hexad_vocab::shacl;
        match self {
            Constraint::MinCount(_) => shacl::MIN_COUNT,
            Constraint::MaxCount(_) => shacl::MAX_COUNT,
            Constraint::Datatype(_) => shacl::DATATYPE,
            Constraint::Class(_) => shacl::CLASS,
            Constraint::NodeKind(_) => shacl::NODE_KIND,
            Constraint::MinLength(_) => shacl::MIN_LENGTH,
            Constraint::MaxLength(_) => shacl::MAX_LENGTH,
            Constraint::Pattern(..) => shacl::PATTERN,
            Constraint::LanguageIn(_) => shacl::LANGUAGE_IN,
            Constraint::UniqueLang(_) => shacl::UNIQUE_LANG,
            Constraint::HasValue(_) => shacl::HAS_VALUE,
            Constraint::In(_) => shacl::IN,
            Constraint::MinInclusive(_) => shacl::MIN_INCLUSIVE,
            Constraint::MaxInclusive(_) => shacl::MAX_INCLUSIVE,
            Constraint::MinExclusive(_) => shacl::MIN_EXCLUSIVE,
            Constraint::MaxExclusive(_) => shacl::MAX_EXCLUSIVE,
            Constraint::Equals(_) => shacl::EQUALS,
            Constraint::Disjoint(_) => shacl::DISJOINT,
            Constraint::LessThan(_) => shacl::LESS_THAN,
            Constraint::LessThanOrEquals(_) => shacl::LESS_THAN_OR_EQUALS,
            Constraint::And(_) => shacl::AND,
            Constraint::Or(_) => shacl::OR,
            Constraint::Not(_) => shacl::NOT,
            Constraint::Xone(_) => shacl::XONE,
        }
    }

    /// Whether this constraint evaluates once against the full value set
    /// (as opposed to once per value).
    pub fn is_set_constraint(&self) -> bool {
        matches!(
            self,
            Constraint::MinCount(_)
                | Constraint::MaxCount(_)
                | Constraint::HasValue(_)
                | Constraint::UniqueLang(_)
                | Constraint::Equals(_)
                | Constraint::Disjoint(_)
                | Constraint::LessThan(_)
                | Constraint::LessThanOrEquals(_)
        )
    }

    /// A short human-readable description, used as the default message.
    pub fn description(&self) -> String {
        match self {
            Constraint::MinCount(n) => format!("sh:minCount {n}"),
            Constraint::MaxCount(n) => format!("sh:maxCount {n}"),
            Constraint::Datatype(dt) => format!("sh:datatype {dt}"),
            Constraint::Class(c) => format!("sh:class {c}"),
            Constraint::NodeKind(kind) => format!("sh:nodeKind {kind:?}"),
            Constraint::MinLength(n) => format!("sh:minLength {n}"),
            Constraint::MaxLength(n) => format!("sh:maxLength {n}"),
            Constraint::Pattern(p, _) => format!("sh:pattern \"{p}\""),
            Constraint::LanguageIn(langs) => format!("sh:languageIn {langs:?}"),
            Constraint::UniqueLang(v) => format!("sh:uniqueLang {v}"),
            Constraint::HasValue(v) => format!("sh:hasValue {v}"),
            Constraint::In(vs) => format!("sh:in ({} values)", vs.len()),
            Constraint::MinInclusive(x) => format!("sh:minInclusive {x}"),
            Constraint::MaxInclusive(x) => format!("sh:maxInclusive {x}"),
            Constraint::MinExclusive(x) => format!("sh:minExclusive {x}"),
            Constraint::MaxExclusive(x) => format!("sh:maxExclusive {x}"),
            Constraint::Equals(p) => format!("sh:equals {p}"),
            Constraint::Disjoint(p) => format!("sh:disjoint {p}"),
            Constraint::LessThan(p) => format!("sh:lessThan {p}"),
            Constraint::LessThanOrEquals(p) => format!("sh:lessThanOrEquals {p}"),
            Constraint::And(shapes) => format!("sh:and ({} shapes)", shapes.len()),
            Constraint::Or(shapes) => format!("sh:or ({} shapes)", shapes.len()),
            Constraint::Not(_) => "sh:not".to_string(),
            Constraint::Xone(shapes) => format!("sh:xone ({} shapes)", shapes.len()),
        }
    }
}

/// A single constraint violation, before it is attached to a focus node.
#[derive(Clone, Debug)]
pub struct ConstraintViolation {
    /// The offending value, for per-value constraints
    pub value: Option<Term>,
    /// What went wrong
    pub message: String,
}

impl ConstraintViolation {
    /// A violation concerning the whole value set.
    pub fn of_set(message: impl Into<String>) -> Self {
        Self {
            value: None,
            message: message.into(),
        }
    }

    /// A violation concerning one value.
    pub fn of_value(value: &Term, message: impl Into<String>) -> Self {
        Self {
            value: Some(value.clone()),
            message: message.into(),
        }
    }
}
