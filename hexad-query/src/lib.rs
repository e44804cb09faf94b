//! SPARQL executor for the hexad engine.
//!
//! Consumes the algebra from `hexad-sparql` and pattern lookups from
//! `hexad-core`:
//!
//! ```
//! use hexad_core::{Graph, Iri, Literal, Triple};
//! use hexad_query::execute;
//! use hexad_sparql::parse;
//!
//! let mut graph = Graph::new();
//! graph.insert(Triple::new(
//!     Iri::new("http://example.org/alice").unwrap(),
//!     Iri::new("http://example.org/name").unwrap(),
//!     Literal::plain("Alice"),
//! ));
//!
//! let query = parse("SELECT ?n WHERE { ?p <http://example.org/name> ?n }").unwrap();
//! let results = execute(&graph, &query);
//! assert_eq!(results.as_solutions().unwrap().len(), 1);
//! ```
//!
//! Evaluation works on lists of [`Solution`]s: each pattern is a step from
//! one solution set to the next, OPTIONAL is a left outer join, UNION a
//! compatibility join over both branches. Execution is synchronous and
//! total: data content never raises an error.

mod execute;
mod filter;
mod modifiers;
mod optional;
mod pattern;
mod results;
mod solution;
mod union;

pub use execute::{evaluate, execute};
pub use results::{GraphResults, QueryResults, SelectResults};
pub use solution::{join, Solution};
