//! RDF term types.
//!
//! Terms are immutable value types: `Iri`, `BlankNode`, and `Literal`,
//! closed over by the `Term` sum. `Node` covers the subject position
//! (IRI or blank node); predicates are always IRIs.
//!
//! Equality and hashing are structural. Literal equality is over all three
//! fields (lexical form, datatype, language tag).

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// An IRI reference.
///
/// The value is held as-is; the constructor only rejects whitespace, which
/// is never legal in an IRI and is the failure mode seen in practice when
/// un-expanded text leaks into a term position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create an IRI, rejecting values containing whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if value.chars().any(char::is_whitespace) {
            return Err(Error::invalid_iri(format!(
                "IRI must not contain whitespace: {value:?}"
            )));
        }
        Ok(Self(Arc::from(value)))
    }

    /// Create an IRI from input already known to be valid, such as the
    /// vocabulary constants in `hexad-vocab`. No validation is performed.
    pub fn new_unchecked(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    /// The IRI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node, identified by a locally scoped label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Create a blank node with the given identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Create a blank node with a freshly generated identifier.
    ///
    /// Identifiers are 64-bit random values rendered as 16 hex digits,
    /// unique for practical purposes within a process.
    pub fn fresh() -> Self {
        Self(Arc::from(format!("{:016x}", rand::random::<u64>())))
    }

    /// The blank node identifier (without the `_:` sigil).
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal: a lexical form plus at most one of a datatype or a language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    value: Arc<str>,
    datatype: Option<Iri>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Create a literal from its parts.
    ///
    /// Fails if both a datatype and a language tag are supplied. Language
    /// tags are lowercased.
    pub fn new(
        value: impl AsRef<str>,
        datatype: Option<Iri>,
        language: Option<&str>,
    ) -> Result<Self> {
        if datatype.is_some() && language.is_some() {
            return Err(Error::invalid_literal(
                "a literal cannot have both a datatype and a language tag",
            ));
        }
        Ok(Self {
            value: Arc::from(value.as_ref()),
            datatype,
            language: language.map(|l| Arc::from(l.to_lowercase().as_str())),
        })
    }

    /// A plain string literal (no datatype, no language).
    pub fn plain(value: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: None,
        }
    }

    /// A typed literal.
    pub fn typed(value: impl AsRef<str>, datatype: Iri) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// A language-tagged literal. The tag is lowercased.
    pub fn lang_tagged(value: impl AsRef<str>, language: &str) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: Some(Arc::from(language.to_lowercase().as_str())),
        }
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), Iri::new_unchecked(hexad_vocab::xsd::INTEGER))
    }

    /// An `xsd:double` literal.
    pub fn double(value: f64) -> Self {
        Self::typed(value.to_string(), Iri::new_unchecked(hexad_vocab::xsd::DOUBLE))
    }

    /// An `xsd:boolean` literal.
    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), Iri::new_unchecked(hexad_vocab::xsd::BOOLEAN))
    }

    /// The lexical form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI, if any.
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// The (lowercased) language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Parse the lexical form as a 64-bit float, if possible.
    ///
    /// This is the numeric coercion used by FILTER ordering comparisons
    /// and SHACL numeric constraints.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value.as_ref())?;
        if let Some(dt) = &self.datatype {
            write!(f, "^^{dt}")?;
        } else if let Some(lang) = &self.language {
            write!(f, "@{lang}")?;
        }
        Ok(())
    }
}

/// Any RDF term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// View this term as a subject-position node, if its kind allows.
    pub fn as_node(&self) -> Option<Node> {
        match self {
            Term::Iri(iri) => Some(Node::Iri(iri.clone())),
            Term::BlankNode(b) => Some(Node::BlankNode(b.clone())),
            Term::Literal(_) => None,
        }
    }

    /// View this term as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// View this term as an IRI, if it is one.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(b: BlankNode) -> Self {
        Term::BlankNode(b)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        match node {
            Node::Iri(iri) => Term::Iri(iri),
            Node::BlankNode(b) => Term::BlankNode(b),
        }
    }
}

/// A term that may appear in subject position: an IRI or a blank node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Iri(Iri),
    BlankNode(BlankNode),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => iri.fmt(f),
            Node::BlankNode(b) => b.fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Iri(iri)
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Self {
        Node::BlankNode(b)
    }
}

impl TryFrom<Term> for Node {
    type Error = Error;

    fn try_from(term: Term) -> Result<Self> {
        match term {
            Term::Iri(iri) => Ok(Node::Iri(iri)),
            Term::BlankNode(b) => Ok(Node::BlankNode(b)),
            Term::Literal(lit) => Err(Error::invalid_term_position(format!(
                "literal {lit} cannot appear in subject position"
            ))),
        }
    }
}

/// An RDF statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    /// Create a triple.
    pub fn new(subject: impl Into<Node>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_rejects_whitespace() {
        assert!(Iri::new("http://example.org/ok").is_ok());
        assert!(Iri::new("http://example.org/not ok").is_err());
        assert!(Iri::new("has\ttab").is_err());
        assert!(Iri::new("has\nnewline").is_err());
    }

    #[test]
    fn test_iri_equality_by_value() {
        let a = Iri::new("http://example.org/x").unwrap();
        let b = Iri::new("http://example.org/x").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_literal_datatype_language_exclusive() {
        let dt = Iri::new(hexad_vocab::xsd::STRING).unwrap();
        assert!(Literal::new("x", Some(dt.clone()), None).is_ok());
        assert!(Literal::new("x", None, Some("en")).is_ok());
        assert!(Literal::new("x", Some(dt), Some("en")).is_err());
    }

    #[test]
    fn test_language_tag_lowercased() {
        let lit = Literal::lang_tagged("Hallo", "DE");
        assert_eq!(lit.language(), Some("de"));

        let lit = Literal::new("Hallo", None, Some("en-US")).unwrap();
        assert_eq!(lit.language(), Some("en-us"));
    }

    #[test]
    fn test_literal_equality_over_all_fields() {
        assert_eq!(Literal::plain("a"), Literal::plain("a"));
        assert_ne!(Literal::plain("30"), Literal::integer(30));
        assert_ne!(
            Literal::lang_tagged("chat", "fr"),
            Literal::lang_tagged("chat", "en")
        );
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(Literal::integer(30).numeric_value(), Some(30.0));
        assert_eq!(Literal::plain("2.5").numeric_value(), Some(2.5));
        assert_eq!(Literal::plain("thirty").numeric_value(), None);
    }

    #[test]
    fn test_fresh_blank_nodes_distinct() {
        let a = BlankNode::fresh();
        let b = BlankNode::fresh();
        assert_ne!(a, b);
        assert_eq!(a.id().len(), 16);
    }

    #[test]
    fn test_node_from_term() {
        let iri = Iri::new("http://example.org/s").unwrap();
        assert!(Node::try_from(Term::Iri(iri)).is_ok());
        assert!(Node::try_from(Term::Literal(Literal::plain("x"))).is_err());
    }

    #[test]
    fn test_display_forms() {
        let iri = Iri::new("http://example.org/s").unwrap();
        assert_eq!(iri.to_string(), "<http://example.org/s>");
        assert_eq!(BlankNode::new("b0").to_string(), "_:b0");
        assert_eq!(Literal::plain("hi").to_string(), "\"hi\"");
        assert_eq!(Literal::lang_tagged("hi", "en").to_string(), "\"hi\"@en");
        assert!(Literal::integer(1).to_string().contains("^^<"));
    }
}
