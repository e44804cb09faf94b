//! End-to-end SHACL validation scenarios.

use hexad_core::{Graph, Iri, Literal, Node, Term, Triple};
use hexad_shacl::{
    validate, Constraint, NodeKind, NodeShape, PropertyShape, Severity, Target,
};

const EX: &str = "http://example.org/";
const FOAF: &str = "http://xmlns.com/foaf/0.1/";

fn iri(s: &str) -> Iri {
    Iri::new(s).unwrap()
}

fn ex(local: &str) -> Iri {
    iri(&format!("{EX}{local}"))
}

fn foaf(local: &str) -> Iri {
    iri(&format!("{FOAF}{local}"))
}

fn alice_node() -> Node {
    Node::Iri(ex("alice"))
}

#[test]
fn min_count_violation_then_conformance() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(
        ex("alice"),
        iri(hexad_vocab::rdf::TYPE),
        foaf("Person"),
    ));

    let shape = NodeShape::new(ex("PersonShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MinCount(1)),
        );

    let report = validate(&graph, &[shape.clone()]);
    assert!(!report.conforms());
    assert_eq!(report.violations().count(), 1);

    let result = &report.results()[0];
    assert_eq!(result.focus, Term::Iri(ex("alice")));
    assert_eq!(result.path, Some(foaf("name")));
    assert_eq!(result.constraint_component, hexad_vocab::shacl::MIN_COUNT);
    assert_eq!(result.severity, Severity::Violation);

    graph.insert(Triple::new(ex("alice"), foaf("name"), Literal::plain("Alice")));
    let report = validate(&graph, &[shape]);
    assert!(report.conforms());
    assert!(report.is_empty());
}

#[test]
fn max_count() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("name"), Literal::plain("Alice")));
    graph.insert(Triple::new(ex("alice"), foaf("name"), Literal::plain("Ali")));

    let shape = NodeShape::new(ex("PersonShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MaxCount(1)),
        );

    let report = validate(&graph, &[shape]);
    assert!(!report.conforms());
}

#[test]
fn target_class_selects_instances() {
    let mut graph = Graph::new();
    for who in ["alice", "bob"] {
        graph.insert(Triple::new(
            ex(who),
            iri(hexad_vocab::rdf::TYPE),
            foaf("Person"),
        ));
    }
    graph.insert(Triple::new(ex("alice"), foaf("name"), Literal::plain("Alice")));

    let shape = NodeShape::new(ex("PersonShape"))
        .with_target(Target::Class(foaf("Person")))
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MinCount(1)),
        );

    // bob has no name, alice does
    let report = validate(&graph, &[shape]);
    assert_eq!(report.violations().count(), 1);
    assert_eq!(report.results()[0].focus, Term::Iri(ex("bob")));
}

#[test]
fn datatype_and_node_kind() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("age"), Literal::integer(30)));
    graph.insert(Triple::new(ex("alice"), foaf("age"), Literal::plain("thirty")));
    graph.insert(Triple::new(ex("alice"), foaf("knows"), ex("bob")));

    let shape = NodeShape::new(ex("PersonShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("age"))
                .with_constraint(Constraint::Datatype(iri(hexad_vocab::xsd::INTEGER))),
        )
        .with_property(
            PropertyShape::new(foaf("knows")).with_constraint(Constraint::NodeKind(NodeKind::Iri)),
        );

    let report = validate(&graph, &[shape]);
    // Only the plain "thirty" literal violates
    assert_eq!(report.violations().count(), 1);
    assert_eq!(
        report.results()[0].value,
        Some(Term::Literal(Literal::plain("thirty")))
    );
}

#[test]
fn class_constraint_is_direct_only() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("knows"), ex("bob")));
    graph.insert(Triple::new(
        ex("bob"),
        iri(hexad_vocab::rdf::TYPE),
        ex("Student"),
    ));
    graph.insert(Triple::new(
        ex("Student"),
        iri(hexad_vocab::rdfs::SUB_CLASS_OF),
        foaf("Person"),
    ));

    let knows_person = NodeShape::new(ex("KnowsPeople"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("knows")).with_constraint(Constraint::Class(foaf("Person"))),
        );
    // bob is a Student, not directly a Person
    assert!(!validate(&graph, &[knows_person]).conforms());

    let knows_student = NodeShape::new(ex("KnowsStudents"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("knows")).with_constraint(Constraint::Class(ex("Student"))),
        );
    assert!(validate(&graph, &[knows_student]).conforms());
}

#[test]
fn string_constraints() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("nick"), Literal::plain("al")));

    let shape = NodeShape::new(ex("NickShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("nick"))
                .with_constraint(Constraint::MinLength(3))
                .with_constraint(Constraint::MaxLength(10))
                .with_constraint(Constraint::Pattern("^[A-Z]".to_string(), None)),
        );

    let report = validate(&graph, &[shape]);
    // "al" is too short and does not start uppercase
    assert_eq!(report.violations().count(), 2);
}

#[test]
fn invalid_regex_warns_and_passes() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("nick"), Literal::plain("al")));

    let shape = NodeShape::new(ex("NickShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("nick"))
                .with_constraint(Constraint::Pattern("(unclosed".to_string(), None)),
        );

    // The broken pattern is skipped, not a violation
    assert!(validate(&graph, &[shape]).conforms());
}

#[test]
fn pattern_flags_case_insensitive() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("nick"), Literal::plain("ALICE")));

    let shape = NodeShape::new(ex("NickShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("nick"))
                .with_constraint(Constraint::Pattern("^alice$".to_string(), Some("i".to_string()))),
        );

    assert!(validate(&graph, &[shape]).conforms());
}

#[test]
fn language_in_and_unique_lang() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(
        ex("thing"),
        iri(&format!("{EX}label")),
        Literal::lang_tagged("chair", "en"),
    ));
    graph.insert(Triple::new(
        ex("thing"),
        iri(&format!("{EX}label")),
        Literal::lang_tagged("seat", "en"),
    ));
    graph.insert(Triple::new(
        ex("thing"),
        iri(&format!("{EX}label")),
        Literal::plain("untagged"),
    ));

    let language_shape = NodeShape::new(ex("LabelLangs"))
        .with_target(Target::Node(Node::Iri(ex("thing"))))
        .with_property(
            PropertyShape::new(iri(&format!("{EX}label")))
                .with_constraint(Constraint::LanguageIn(vec!["en".into(), "de".into()])),
        );
    // Tagged labels are in the set; the untagged literal passes
    assert!(validate(&graph, &[language_shape]).conforms());

    let unique_shape = NodeShape::new(ex("UniqueLabelLangs"))
        .with_target(Target::Node(Node::Iri(ex("thing"))))
        .with_property(
            PropertyShape::new(iri(&format!("{EX}label")))
                .with_constraint(Constraint::UniqueLang(true)),
        );
    // "en" appears twice
    assert!(!validate(&graph, &[unique_shape]).conforms());
}

#[test]
fn has_value_and_in() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), ex("status"), Literal::plain("active")));

    let ok = NodeShape::new(ex("StatusShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(ex("status"))
                .with_constraint(Constraint::HasValue(Term::Literal(Literal::plain("active"))))
                .with_constraint(Constraint::In(vec![
                    Term::Literal(Literal::plain("active")),
                    Term::Literal(Literal::plain("inactive")),
                ])),
        );
    assert!(validate(&graph, &[ok]).conforms());

    let missing = NodeShape::new(ex("StatusShape2"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(ex("status"))
                .with_constraint(Constraint::HasValue(Term::Literal(Literal::plain("retired")))),
        );
    assert!(!validate(&graph, &[missing]).conforms());

    let outside = NodeShape::new(ex("StatusShape3"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(ex("status"))
                .with_constraint(Constraint::In(vec![Term::Literal(Literal::plain("other"))])),
        );
    assert!(!validate(&graph, &[outside]).conforms());
}

#[test]
fn numeric_ranges() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("age"), Literal::integer(30)));

    let in_range = NodeShape::new(ex("AgeShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("age"))
                .with_constraint(Constraint::MinInclusive(0.0))
                .with_constraint(Constraint::MaxInclusive(150.0))
                .with_constraint(Constraint::MinExclusive(18.0)),
        );
    assert!(validate(&graph, &[in_range]).conforms());

    let out_of_range = NodeShape::new(ex("MinorShape"))
        .with_target(Target::Node(alice_node()))
        .with_property(
            PropertyShape::new(foaf("age")).with_constraint(Constraint::MaxExclusive(30.0)),
        );
    assert!(!validate(&graph, &[out_of_range]).conforms());
}

#[test]
fn property_pairs() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("job"), ex("start"), Literal::integer(2010)));
    graph.insert(Triple::new(ex("job"), ex("end"), Literal::integer(2020)));
    graph.insert(Triple::new(ex("job"), ex("declared"), Literal::integer(2010)));

    let job = Node::Iri(ex("job"));

    let less = NodeShape::new(ex("SpanShape"))
        .with_target(Target::Node(job.clone()))
        .with_property(
            PropertyShape::new(ex("start")).with_constraint(Constraint::LessThan(ex("end"))),
        );
    assert!(validate(&graph, &[less]).conforms());

    let equals = NodeShape::new(ex("DeclaredShape"))
        .with_target(Target::Node(job.clone()))
        .with_property(
            PropertyShape::new(ex("start")).with_constraint(Constraint::Equals(ex("declared"))),
        );
    assert!(validate(&graph, &[equals]).conforms());

    let disjoint = NodeShape::new(ex("DisjointShape"))
        .with_target(Target::Node(job))
        .with_property(
            PropertyShape::new(ex("start")).with_constraint(Constraint::Disjoint(ex("declared"))),
        );
    assert!(!validate(&graph, &[disjoint]).conforms());
}

#[test]
fn logical_constraints() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("age"), Literal::integer(30)));

    let adult = || {
        NodeShape::new(ex("Adult")).with_property(
            PropertyShape::new(foaf("age")).with_constraint(Constraint::MinInclusive(18.0)),
        )
    };
    let senior = || {
        NodeShape::new(ex("Senior")).with_property(
            PropertyShape::new(foaf("age")).with_constraint(Constraint::MinInclusive(65.0)),
        )
    };

    // Or: adult or senior - alice is an adult
    let or_shape = NodeShape::new(ex("OrShape"))
        .with_target(Target::Node(alice_node()))
        .with_constraint(Constraint::Or(vec![adult(), senior()]));
    assert!(validate(&graph, &[or_shape]).conforms());

    // And: both - alice is not a senior, and And unions the sub-violations
    let and_shape = NodeShape::new(ex("AndShape"))
        .with_target(Target::Node(alice_node()))
        .with_constraint(Constraint::And(vec![adult(), senior()]));
    assert!(!validate(&graph, &[and_shape]).conforms());

    // Not: alice must not conform to Senior - she doesn't, so this passes
    let not_shape = NodeShape::new(ex("NotShape"))
        .with_target(Target::Node(alice_node()))
        .with_constraint(Constraint::Not(Box::new(senior())));
    assert!(validate(&graph, &[not_shape]).conforms());

    // Not(adult) is a violation: alice does conform to Adult
    let not_adult = NodeShape::new(ex("NotAdult"))
        .with_target(Target::Node(alice_node()))
        .with_constraint(Constraint::Not(Box::new(adult())));
    assert!(!validate(&graph, &[not_adult]).conforms());

    // Xone: exactly one of adult/senior - only Adult matches
    let xone = NodeShape::new(ex("XoneShape"))
        .with_target(Target::Node(alice_node()))
        .with_constraint(Constraint::Xone(vec![adult(), senior()]));
    assert!(validate(&graph, &[xone]).conforms());
}

#[test]
fn severity_and_messages() {
    let graph = {
        let mut g = Graph::new();
        g.insert(Triple::new(
            ex("alice"),
            iri(hexad_vocab::rdf::TYPE),
            foaf("Person"),
        ));
        g
    };

    let warn_shape = NodeShape::new(ex("NameSuggested"))
        .with_target(Target::Class(foaf("Person")))
        .with_severity(Severity::Warning)
        .with_message("a person should have a name")
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MinCount(1)),
        );

    let report = validate(&graph, &[warn_shape]);
    // Warnings are reported but do not block conformance
    assert!(report.conforms());
    assert_eq!(report.len(), 1);
    assert_eq!(report.results()[0].severity, Severity::Warning);
    assert_eq!(report.results()[0].message, "a person should have a name");
}

#[test]
fn deactivated_shapes_are_skipped() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(
        ex("alice"),
        iri(hexad_vocab::rdf::TYPE),
        foaf("Person"),
    ));

    let shape = NodeShape::new(ex("PersonShape"))
        .with_target(Target::Class(foaf("Person")))
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MinCount(1)),
        )
        .deactivated();

    assert!(validate(&graph, &[shape]).conforms());
}

#[test]
fn target_subjects_and_objects_of() {
    let mut graph = Graph::new();
    graph.insert(Triple::new(ex("alice"), foaf("knows"), ex("bob")));

    // Everyone who knows someone must have a name
    let subjects = NodeShape::new(ex("KnowerShape"))
        .with_target(Target::SubjectsOf(foaf("knows")))
        .with_property(
            PropertyShape::new(foaf("name")).with_constraint(Constraint::MinCount(1)),
        );
    let report = validate(&graph, &[subjects]);
    assert_eq!(report.violations().count(), 1);
    assert_eq!(report.results()[0].focus, Term::Iri(ex("alice")));

    // Everyone known must be an IRI at node level
    let objects = NodeShape::new(ex("KnownShape"))
        .with_target(Target::ObjectsOf(foaf("knows")))
        .with_constraint(Constraint::NodeKind(NodeKind::Iri));
    assert!(validate(&graph, &[objects]).conforms());
}

#[test]
fn empty_shape_set_conforms() {
    let graph = Graph::new();
    let report = validate(&graph, &[]);
    assert!(report.conforms());
    assert!(report.is_empty());
}
