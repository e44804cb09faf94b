//! Prefix registry: short name to namespace IRI bindings.
//!
//! The registry expands `pfx:local` names to full IRIs and abbreviates full
//! IRIs back to prefixed form, picking the longest matching namespace.

use crate::error::{Error, Result};
use crate::term::Iri;
use rustc_hash::FxHashMap;

/// A mapping from prefix short names (possibly empty) to namespace IRIs.
#[derive(Clone, Debug, Default)]
pub struct PrefixRegistry {
    namespaces: FxHashMap<String, String>,
}

impl PrefixRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the conventional rdf/rdfs/xsd/owl/sh bindings.
    pub fn with_common() -> Self {
        let mut registry = Self::new();
        for &(prefix, ns) in hexad_vocab::prefixes::COMMON {
            registry.register(prefix, ns);
        }
        registry
    }

    /// Bind a prefix to a namespace, replacing any previous binding.
    pub fn register(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.insert(prefix.into(), namespace.into());
    }

    /// Look up a prefix's namespace.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Expand a `prefix:local` name to a full IRI.
    ///
    /// Fails with `UnknownPrefix` when the prefix has no binding and with
    /// `InvalidPrefixedName` when the input has no colon.
    pub fn expand(&self, prefixed: &str) -> Result<Iri> {
        let (prefix, local) = prefixed
            .split_once(':')
            .ok_or_else(|| Error::InvalidPrefixedName(prefixed.to_string()))?;
        let namespace = self
            .namespaces
            .get(prefix)
            .ok_or_else(|| Error::unknown_prefix(prefix))?;
        Iri::new(format!("{namespace}{local}"))
    }

    /// Abbreviate a full IRI to `prefix:local` form.
    ///
    /// Picks the longest registered namespace that prefixes the IRI.
    /// Returns `None` when no namespace matches.
    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        let text = iri.as_str();
        let (prefix, namespace) = self
            .namespaces
            .iter()
            .filter(|(_, ns)| text.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())?;
        Some(format!("{prefix}:{}", &text[namespace.len()..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_expand() {
        let mut registry = PrefixRegistry::new();
        registry.register("foaf", "http://xmlns.com/foaf/0.1/");

        let iri = registry.expand("foaf:name").unwrap();
        assert_eq!(iri.as_str(), "http://xmlns.com/foaf/0.1/name");
    }

    #[test]
    fn test_expand_unknown_prefix() {
        let registry = PrefixRegistry::new();
        let err = registry.expand("foaf:name").unwrap_err();
        assert_eq!(err, Error::UnknownPrefix("foaf".to_string()));
    }

    #[test]
    fn test_expand_without_colon() {
        let registry = PrefixRegistry::new();
        assert!(matches!(
            registry.expand("nocolon"),
            Err(Error::InvalidPrefixedName(_))
        ));
    }

    #[test]
    fn test_empty_prefix() {
        let mut registry = PrefixRegistry::new();
        registry.register("", "http://example.org/");
        let iri = registry.expand(":thing").unwrap();
        assert_eq!(iri.as_str(), "http://example.org/thing");
    }

    #[test]
    fn test_abbreviate_longest_match() {
        let mut registry = PrefixRegistry::new();
        registry.register("ex", "http://example.org/");
        registry.register("voc", "http://example.org/vocab/");

        let iri = Iri::new("http://example.org/vocab/Person").unwrap();
        assert_eq!(registry.abbreviate(&iri), Some("voc:Person".to_string()));

        let iri = Iri::new("http://example.org/alice").unwrap();
        assert_eq!(registry.abbreviate(&iri), Some("ex:alice".to_string()));

        let iri = Iri::new("http://other.org/x").unwrap();
        assert_eq!(registry.abbreviate(&iri), None);
    }

    #[test]
    fn test_common_registry() {
        let registry = PrefixRegistry::with_common();
        let iri = registry.expand("rdf:type").unwrap();
        assert_eq!(iri.as_str(), hexad_vocab::rdf::TYPE);
        assert_eq!(
            registry.abbreviate(&iri),
            Some("rdf:type".to_string())
        );
    }
}
