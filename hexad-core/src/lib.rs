//! Core data model and triple store for the hexad RDF engine.
//!
//! This crate provides:
//! - The RDF term model: [`Iri`], [`BlankNode`], [`Literal`], [`Term`],
//!   [`Node`], [`Triple`]
//! - The in-memory [`Graph`] store with hexastore-style SPO/PSO/OPS
//!   indexes and incremental statistics
//! - [`TriplePattern`] lookups covering every bound/unbound combination
//! - The [`PrefixRegistry`] for `prefix:local` expansion and abbreviation
//!
//! The store is single-threaded and synchronous: mutations and lookups run
//! to completion, and sharing a graph across threads requires external
//! synchronization.

mod error;
mod graph;
mod pattern;
mod prefix;
mod term;

pub use error::{Error, Result};
pub use graph::Graph;
pub use pattern::TriplePattern;
pub use prefix::PrefixRegistry;
pub use term::{BlankNode, Iri, Literal, Node, Term, Triple};
