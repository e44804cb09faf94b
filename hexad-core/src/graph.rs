//! The in-memory triple store.
//!
//! Three coordinated nested hash indexes cover every bound/unbound lookup
//! combination with at worst one index scan:
//!
//! - SPO: subject -> predicate -> objects
//! - PSO: predicate -> subject -> objects
//! - OPS: object -> predicate -> subjects
//!
//! All three are kept mutually consistent by `insert`/`remove`; empty inner
//! maps are pruned on removal so the per-position counts stay accurate.

use crate::pattern::TriplePattern;
use crate::prefix::PrefixRegistry;
use crate::term::{Iri, Node, Term, Triple};
use crate::Result;
use rustc_hash::{FxHashMap, FxHashSet};

/// An in-memory RDF graph with hexastore-style indexes and a prefix registry.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    spo: FxHashMap<Node, FxHashMap<Iri, FxHashSet<Term>>>,
    pso: FxHashMap<Iri, FxHashMap<Node, FxHashSet<Term>>>,
    ops: FxHashMap<Term, FxHashMap<Iri, FxHashSet<Node>>>,
    len: usize,
    prefixes: PrefixRegistry,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph with the conventional rdf/rdfs/xsd/owl/sh prefixes
    /// already registered.
    pub fn with_common_prefixes() -> Self {
        Self {
            prefixes: PrefixRegistry::with_common(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a triple. Returns `true` if the triple was new.
    ///
    /// Insertion is idempotent: re-adding an existing triple changes nothing.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let Triple {
            subject,
            predicate,
            object,
        } = triple;

        let added = self
            .spo
            .entry(subject.clone())
            .or_default()
            .entry(predicate.clone())
            .or_default()
            .insert(object.clone());
        if !added {
            return false;
        }

        self.pso
            .entry(predicate.clone())
            .or_default()
            .entry(subject.clone())
            .or_default()
            .insert(object.clone());
        self.ops
            .entry(object)
            .or_default()
            .entry(predicate)
            .or_default()
            .insert(subject);
        self.len += 1;
        true
    }

    /// Remove a triple. Returns `true` if the triple was present.
    ///
    /// Removing an absent triple is a no-op.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        let removed = match self.spo.get_mut(&triple.subject) {
            Some(by_pred) => match by_pred.get_mut(&triple.predicate) {
                Some(objects) => {
                    let removed = objects.remove(&triple.object);
                    if objects.is_empty() {
                        by_pred.remove(&triple.predicate);
                    }
                    if by_pred.is_empty() {
                        self.spo.remove(&triple.subject);
                    }
                    removed
                }
                None => false,
            },
            None => false,
        };
        if !removed {
            return false;
        }

        if let Some(by_subj) = self.pso.get_mut(&triple.predicate) {
            if let Some(objects) = by_subj.get_mut(&triple.subject) {
                objects.remove(&triple.object);
                if objects.is_empty() {
                    by_subj.remove(&triple.subject);
                }
            }
            if by_subj.is_empty() {
                self.pso.remove(&triple.predicate);
            }
        }
        if let Some(by_pred) = self.ops.get_mut(&triple.object) {
            if let Some(subjects) = by_pred.get_mut(&triple.predicate) {
                subjects.remove(&triple.subject);
                if subjects.is_empty() {
                    by_pred.remove(&triple.predicate);
                }
            }
            if by_pred.is_empty() {
                self.ops.remove(&triple.object);
            }
        }
        self.len -= 1;
        true
    }

    /// Remove every triple. Prefix registrations are kept.
    pub fn clear(&mut self) {
        self.spo.clear();
        self.pso.clear();
        self.ops.clear();
        self.len = 0;
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Whether the graph contains the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.spo
            .get(&triple.subject)
            .and_then(|by_pred| by_pred.get(&triple.predicate))
            .map_or(false, |objects| objects.contains(&triple.object))
    }

    /// Return all triples matching the pattern's bound positions.
    ///
    /// Each of the eight bound/unbound combinations is routed to the index
    /// that answers it with a single scan. The result order is unspecified
    /// but stable within one call.
    pub fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Triple> {
        match (&pattern.subject, &pattern.predicate, &pattern.object) {
            // (s, p, o): existence check on SPO
            (Some(s), Some(p), Some(o)) => {
                let triple = Triple::new(s.clone(), p.clone(), o.clone());
                if self.contains(&triple) {
                    vec![triple]
                } else {
                    Vec::new()
                }
            }
            // (s, p, ?): SPO[s][p]
            (Some(s), Some(p), None) => self
                .spo
                .get(s)
                .and_then(|by_pred| by_pred.get(p))
                .map(|objects| {
                    objects
                        .iter()
                        .map(|o| Triple::new(s.clone(), p.clone(), o.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            // (?, p, o): OPS[o][p]
            (None, Some(p), Some(o)) => self
                .ops
                .get(o)
                .and_then(|by_pred| by_pred.get(p))
                .map(|subjects| {
                    subjects
                        .iter()
                        .map(|s| Triple::new(s.clone(), p.clone(), o.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            // (s, ?, o): SPO[s], filtered by object equality
            (Some(s), None, Some(o)) => self
                .spo
                .get(s)
                .map(|by_pred| {
                    by_pred
                        .iter()
                        .filter(|(_, objects)| objects.contains(o))
                        .map(|(p, _)| Triple::new(s.clone(), p.clone(), o.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            // (s, ?, ?): SPO[s]
            (Some(s), None, None) => self
                .spo
                .get(s)
                .map(|by_pred| {
                    by_pred
                        .iter()
                        .flat_map(|(p, objects)| {
                            objects
                                .iter()
                                .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
            // (?, p, ?): PSO[p]
            (None, Some(p), None) => self
                .pso
                .get(p)
                .map(|by_subj| {
                    by_subj
                        .iter()
                        .flat_map(|(s, objects)| {
                            objects
                                .iter()
                                .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
            // (?, ?, o): OPS[o]
            (None, None, Some(o)) => self
                .ops
                .get(o)
                .map(|by_pred| {
                    by_pred
                        .iter()
                        .flat_map(|(p, subjects)| {
                            subjects
                                .iter()
                                .map(move |s| Triple::new(s.clone(), p.clone(), o.clone()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
            // (?, ?, ?): full scan via SPO
            (None, None, None) => self.iter().collect(),
        }
    }

    /// Iterate over every triple exactly once.
    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.spo.iter().flat_map(|(s, by_pred)| {
            by_pred.iter().flat_map(move |(p, objects)| {
                objects
                    .iter()
                    .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()))
            })
        })
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct subjects.
    pub fn subject_count(&self) -> usize {
        self.spo.len()
    }

    /// Number of distinct predicates.
    pub fn predicate_count(&self) -> usize {
        self.pso.len()
    }

    /// Number of distinct objects.
    pub fn object_count(&self) -> usize {
        self.ops.len()
    }

    /// Number of triples carrying the given predicate.
    pub fn count_by_predicate(&self, predicate: &Iri) -> usize {
        self.pso
            .get(predicate)
            .map(|by_subj| by_subj.values().map(FxHashSet::len).sum())
            .unwrap_or(0)
    }

    // =========================================================================
    // Prefixes
    // =========================================================================

    /// Bind a prefix to a namespace on this graph's registry.
    pub fn register_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.register(prefix, namespace);
    }

    /// Expand a `prefix:local` name using this graph's registry.
    pub fn expand(&self, prefixed: &str) -> Result<Iri> {
        self.prefixes.expand(prefixed)
    }

    /// Abbreviate a full IRI using this graph's registry.
    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        self.prefixes.abbreviate(iri)
    }

    /// The graph's prefix registry.
    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}
