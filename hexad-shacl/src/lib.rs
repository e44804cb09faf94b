//! SHACL-Core validation for the hexad engine.
//!
//! Shapes are plain values built by the caller; validation walks the store
//! through its pattern-lookup API:
//!
//! ```
//! use hexad_core::{Graph, Iri, Literal, Triple};
//! use hexad_shacl::{validate, Constraint, NodeShape, PropertyShape, Target};
//!
//! let mut graph = Graph::new();
//! let alice = Iri::new("http://example.org/alice").unwrap();
//! graph.insert(Triple::new(
//!     alice.clone(),
//!     Iri::new("http://example.org/name").unwrap(),
//!     Literal::plain("Alice"),
//! ));
//!
//! let shape = NodeShape::new(Iri::new("http://example.org/PersonShape").unwrap())
//!     .with_target(Target::Node(hexad_core::Node::Iri(alice)))
//!     .with_property(
//!         PropertyShape::new(Iri::new("http://example.org/name").unwrap())
//!             .with_constraint(Constraint::MinCount(1)),
//!     );
//!
//! let report = validate(&graph, &[shape]);
//! assert!(report.conforms());
//! ```

mod error;
mod report;
mod shape;
mod targets;
mod validate;

pub mod constraints;

pub use constraints::{Constraint, ConstraintViolation};
pub use error::{Result, ShaclError};
pub use report::{ValidationReport, ValidationResult};
pub use shape::{NodeKind, NodeShape, PropertyShape, Severity, Target};
pub use targets::resolve_targets;
pub use validate::validate;
