//! Shape model: node shapes, property shapes, targets, severities.
//!
//! Shapes are plain data built by the caller and consumed read-only by the
//! validator.

use crate::constraints::Constraint;
use hexad_core::{Iri, Node};

/// Severity attached to results produced by a shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    /// sh:Violation - blocks conformance
    #[default]
    Violation,
    /// sh:Warning - reported, non-blocking
    Warning,
    /// sh:Info - reported, non-blocking
    Info,
}

impl Severity {
    /// The severity's IRI in the SHACL vocabulary.
    pub fn iri(&self) -> &'static str {
        match self {
            Severity::Violation => hexad_vocab::shacl::VIOLATION,
            Severity::Warning => hexad_vocab::shacl::WARNING,
            Severity::Info => hexad_vocab::shacl::INFO,
        }
    }
}

/// How a shape selects its focus nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// sh:targetClass - every subject with `rdf:type <class>`
    Class(Iri),
    /// sh:targetNode - one specific node
    Node(Node),
    /// sh:targetSubjectsOf - subjects of triples with this predicate
    SubjectsOf(Iri),
    /// sh:targetObjectsOf - objects of triples with this predicate
    ObjectsOf(Iri),
}

/// Node kinds for the sh:nodeKind constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Iri,
    BlankNode,
    Literal,
    BlankNodeOrIri,
    BlankNodeOrLiteral,
    IriOrLiteral,
}

/// A node shape: targets plus constraints on the focus node and its
/// properties.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
    /// The shape's identifier
    pub id: Iri,
    /// Target selectors; no targets means no focus nodes
    pub targets: Vec<Target>,
    /// Constraints applied to the focus node itself
    pub constraints: Vec<Constraint>,
    /// Constraints applied to property values of the focus node
    pub properties: Vec<PropertyShape>,
    /// Custom message for results from this shape
    pub message: Option<String>,
    /// Severity of results from this shape
    pub severity: Severity,
    /// Deactivated shapes are skipped entirely
    pub deactivated: bool,
}

impl NodeShape {
    /// Create a shape with no targets or constraints.
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            targets: Vec::new(),
            constraints: Vec::new(),
            properties: Vec::new(),
            message: None,
            severity: Severity::default(),
            deactivated: false,
        }
    }

    /// Add a target selector.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Add a focus-node constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add a property shape.
    pub fn with_property(mut self, property: PropertyShape) -> Self {
        self.properties.push(property);
        self
    }

    /// Set the custom message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Mark the shape deactivated.
    pub fn deactivated(mut self) -> Self {
        self.deactivated = true;
        self
    }
}

/// A property shape: constraints on the values of one predicate.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyShape {
    /// Optional identifier (property shapes are often blank)
    pub id: Option<Iri>,
    /// The predicate whose values are constrained
    pub path: Iri,
    /// Constraints on the value set / individual values
    pub constraints: Vec<Constraint>,
    /// Custom message for results from this property shape
    pub message: Option<String>,
    /// Severity of results from this property shape
    pub severity: Severity,
    /// Human-readable name
    pub name: Option<String>,
}

impl PropertyShape {
    /// Create a property shape on the given path.
    pub fn new(path: Iri) -> Self {
        Self {
            id: None,
            path,
            constraints: Vec::new(),
            message: None,
            severity: Severity::default(),
            name: None,
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: Iri) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Set the custom message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
