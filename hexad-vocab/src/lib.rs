//! RDF vocabulary constants for the hexad engine.
//!
//! This crate is the single home for well-known IRIs so that the store,
//! the query engine, and the validator all agree on them.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD datatypes (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `shacl` - SHACL vocabulary (http://www.w3.org/ns/shacl#)
//! - `prefixes` - conventional short names and namespace IRIs

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// XSD datatype constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:time IRI
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

    /// Check if a datatype IRI is a numeric type
    #[inline]
    pub fn is_numeric_datatype(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER | LONG | INT | DECIMAL | FLOAT | DOUBLE
        )
    }

    /// Get the local name portion of a datatype IRI (e.g., "integer")
    #[inline]
    pub fn datatype_local_name(datatype_iri: &str) -> Option<&str> {
        datatype_iri.rsplit('#').next()
    }
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace IRI
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

    /// owl:equivalentClass IRI
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";

    /// owl:inverseOf IRI
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
}

/// SHACL vocabulary constants
pub mod shacl {
    /// SHACL namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    /// sh:NodeShape IRI
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";

    /// sh:PropertyShape IRI
    pub const PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";

    /// sh:targetClass IRI
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";

    /// sh:targetNode IRI
    pub const TARGET_NODE: &str = "http://www.w3.org/ns/shacl#targetNode";

    /// sh:targetSubjectsOf IRI
    pub const TARGET_SUBJECTS_OF: &str = "http://www.w3.org/ns/shacl#targetSubjectsOf";

    /// sh:targetObjectsOf IRI
    pub const TARGET_OBJECTS_OF: &str = "http://www.w3.org/ns/shacl#targetObjectsOf";

    /// sh:minCount IRI
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";

    /// sh:maxCount IRI
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";

    /// sh:datatype IRI
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";

    /// sh:nodeKind IRI
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";

    /// sh:class IRI
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";

    /// sh:minLength IRI
    pub const MIN_LENGTH: &str = "http://www.w3.org/ns/shacl#minLength";

    /// sh:maxLength IRI
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";

    /// sh:pattern IRI
    pub const PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";

    /// sh:languageIn IRI
    pub const LANGUAGE_IN: &str = "http://www.w3.org/ns/shacl#languageIn";

    /// sh:uniqueLang IRI
    pub const UNIQUE_LANG: &str = "http://www.w3.org/ns/shacl#uniqueLang";

    /// sh:hasValue IRI
    pub const HAS_VALUE: &str = "http://www.w3.org/ns/shacl#hasValue";

    /// sh:in IRI
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";

    /// sh:minInclusive IRI
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";

    /// sh:maxInclusive IRI
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";

    /// sh:minExclusive IRI
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#minExclusive";

    /// sh:maxExclusive IRI
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxExclusive";

    /// sh:equals IRI
    pub const EQUALS: &str = "http://www.w3.org/ns/shacl#equals";

    /// sh:disjoint IRI
    pub const DISJOINT: &str = "http://www.w3.org/ns/shacl#disjoint";

    /// sh:lessThan IRI
    pub const LESS_THAN: &str = "http://www.w3.org/ns/shacl#lessThan";

    /// sh:lessThanOrEquals IRI
    pub const LESS_THAN_OR_EQUALS: &str = "http://www.w3.org/ns/shacl#lessThanOrEquals";

    /// sh:not IRI
    pub const NOT: &str = "http://www.w3.org/ns/shacl#not";

    /// sh:and IRI
    pub const AND: &str = "http://www.w3.org/ns/shacl#and";

    /// sh:or IRI
    pub const OR: &str = "http://www.w3.org/ns/shacl#or";

    /// sh:xone IRI
    pub const XONE: &str = "http://www.w3.org/ns/shacl#xone";

    /// sh:IRI node kind IRI
    pub const IRI: &str = "http://www.w3.org/ns/shacl#IRI";

    /// sh:BlankNode node kind IRI
    pub const BLANK_NODE: &str = "http://www.w3.org/ns/shacl#BlankNode";

    /// sh:Literal node kind IRI
    pub const LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";

    /// sh:BlankNodeOrIRI node kind IRI
    pub const BLANK_NODE_OR_IRI: &str = "http://www.w3.org/ns/shacl#BlankNodeOrIRI";

    /// sh:BlankNodeOrLiteral node kind IRI
    pub const BLANK_NODE_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#BlankNodeOrLiteral";

    /// sh:IRIOrLiteral node kind IRI
    pub const IRI_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#IRIOrLiteral";

    /// sh:Violation severity IRI
    pub const VIOLATION: &str = "http://www.w3.org/ns/shacl#Violation";

    /// sh:Warning severity IRI
    pub const WARNING: &str = "http://www.w3.org/ns/shacl#Warning";

    /// sh:Info severity IRI
    pub const INFO: &str = "http://www.w3.org/ns/shacl#Info";

    /// sh:ValidationReport IRI
    pub const VALIDATION_REPORT: &str = "http://www.w3.org/ns/shacl#ValidationReport";

    /// sh:ValidationResult IRI
    pub const VALIDATION_RESULT: &str = "http://www.w3.org/ns/shacl#ValidationResult";

    /// sh:conforms IRI
    pub const CONFORMS: &str = "http://www.w3.org/ns/shacl#conforms";

    /// sh:focusNode IRI
    pub const FOCUS_NODE: &str = "http://www.w3.org/ns/shacl#focusNode";

    /// sh:resultPath IRI
    pub const RESULT_PATH: &str = "http://www.w3.org/ns/shacl#resultPath";

    /// sh:value IRI
    pub const VALUE: &str = "http://www.w3.org/ns/shacl#value";

    /// sh:sourceShape IRI
    pub const SOURCE_SHAPE: &str = "http://www.w3.org/ns/shacl#sourceShape";

    /// sh:resultMessage IRI
    pub const RESULT_MESSAGE: &str = "http://www.w3.org/ns/shacl#resultMessage";

    /// sh:resultSeverity IRI
    pub const RESULT_SEVERITY: &str = "http://www.w3.org/ns/shacl#resultSeverity";
}

/// Conventional prefix short names and their namespace IRIs.
///
/// These are the bindings seeded by `Graph::with_common_prefixes` and used
/// throughout the test suites.
pub mod prefixes {
    /// (short name, namespace IRI) pairs in registration order
    pub const COMMON: &[(&str, &str)] = &[
        ("rdf", super::rdf::NS),
        ("rdfs", super::rdfs::NS),
        ("xsd", super::xsd::NS),
        ("owl", super::owl::NS),
        ("sh", super::shacl::NS),
    ];
}
