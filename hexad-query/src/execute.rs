//! Query execution: pattern evaluation and per-form dispatch.

use crate::filter::step_filter;
use crate::modifiers::{apply_modifiers, distinct};
use crate::optional::step_optional;
use crate::pattern::step_triple;
use crate::results::{GraphResults, QueryResults, SelectResults};
use crate::solution::{join, Solution};
use crate::union::step_union;
use hexad_core::{Graph, Iri, Node, Term, Triple, TriplePattern as StorePattern};
use hexad_sparql::ast::{
    ConstructQuery, DescribeQuery, Pattern, Query, SelectQuery, TermPattern, VarOrIri,
};
use rustc_hash::FxHashSet;

/// Execute a query against a graph.
///
/// Execution is total: data content never raises an error, it only shrinks
/// the result.
pub fn execute(graph: &Graph, query: &Query) -> QueryResults {
    match query {
        Query::Select(select) => QueryResults::Solutions(execute_select(graph, select)),
        Query::Construct(construct) => QueryResults::Graph(execute_construct(graph, construct)),
        Query::Ask(ask) => QueryResults::Boolean(!evaluate(graph, &ask.patterns).is_empty()),
        Query::Describe(describe) => QueryResults::Graph(execute_describe(graph, describe)),
    }
}

/// Evaluate a pattern list left to right from the singleton empty seed.
pub fn evaluate(graph: &Graph, patterns: &[Pattern]) -> Vec<Solution> {
    let mut solutions = vec![Solution::new()];
    for pattern in patterns {
        solutions = step(graph, pattern, solutions);
        if solutions.is_empty() {
            break;
        }
    }
    solutions
}

/// Apply one pattern to the current solution set.
fn step(graph: &Graph, pattern: &Pattern, solutions: Vec<Solution>) -> Vec<Solution> {
    match pattern {
        Pattern::Triple(tp) => step_triple(graph, tp, solutions),
        Pattern::Filter(expr) => step_filter(expr, solutions),
        Pattern::Optional(inner) => step_optional(graph, inner, solutions),
        Pattern::Union(left, right) => step_union(graph, left, right, solutions),
        Pattern::Group(inner) => {
            let group = evaluate(graph, inner);
            join(&solutions, &group)
        }
    }
}

/// SELECT: evaluate, DISTINCT, ORDER BY / OFFSET / LIMIT, then project.
fn execute_select(graph: &Graph, query: &SelectQuery) -> SelectResults {
    let mut solutions = evaluate(graph, &query.patterns);
    if query.distinct {
        solutions = distinct(solutions);
    }
    solutions = apply_modifiers(&query.modifiers, solutions);

    let projected = solutions
        .into_iter()
        .map(|sol| sol.project(&query.variables))
        .collect();
    SelectResults::new(query.variables.clone(), projected)
}

/// CONSTRUCT: evaluate, apply modifiers, instantiate the template per
/// solution, and deduplicate.
fn execute_construct(graph: &Graph, query: &ConstructQuery) -> GraphResults {
    let solutions = apply_modifiers(&query.modifiers, evaluate(graph, &query.patterns));

    let mut seen = FxHashSet::default();
    let mut triples = Vec::new();
    for sigma in &solutions {
        for template in &query.template {
            if let Some(triple) = instantiate(template, sigma) {
                if seen.insert(triple.clone()) {
                    triples.push(triple);
                }
            }
        }
    }
    GraphResults::new(triples)
}

/// Instantiate a template pattern under a solution.
///
/// The triple is produced only when every position resolves to a term
/// valid for it: subjects must be IRIs or blank nodes, predicates IRIs.
fn instantiate(template: &hexad_sparql::ast::TriplePattern, sigma: &Solution) -> Option<Triple> {
    let subject: Node = position_term(&template.subject, sigma)?.as_node()?;
    let predicate: Iri = position_term(&template.predicate, sigma)?.as_iri()?.clone();
    let object: Term = position_term(&template.object, sigma)?.clone();
    Some(Triple::new(subject, predicate, object))
}

fn position_term<'a>(position: &'a TermPattern, sigma: &'a Solution) -> Option<&'a Term> {
    match position {
        TermPattern::Term(term) => Some(term),
        TermPattern::Var(name) => sigma.get(name),
    }
}

/// DESCRIBE: resolve the resource set, then emit every triple in which a
/// resource appears as subject or object.
fn execute_describe(graph: &Graph, query: &DescribeQuery) -> GraphResults {
    let mut resources: Vec<Term> = Vec::new();
    let mut push_unique = |term: Term, resources: &mut Vec<Term>| {
        if !resources.contains(&term) {
            resources.push(term);
        }
    };

    match &query.patterns {
        None => {
            // Without WHERE the resources are the listed IRIs; listed
            // variables have nothing to bind them.
            for resource in &query.resources {
                if let VarOrIri::Iri(iri) = resource {
                    push_unique(Term::Iri(iri.clone()), &mut resources);
                }
            }
        }
        Some(patterns) => {
            let solutions = evaluate(graph, patterns);
            for resource in &query.resources {
                match resource {
                    VarOrIri::Iri(iri) => {
                        push_unique(Term::Iri(iri.clone()), &mut resources)
                    }
                    VarOrIri::Var(name) => {
                        for sigma in &solutions {
                            if let Some(term) = sigma.get(name) {
                                push_unique(term.clone(), &mut resources);
                            }
                        }
                    }
                }
            }
        }
    }

    let mut seen = FxHashSet::default();
    let mut triples = Vec::new();
    for resource in &resources {
        if let Some(node) = resource.as_node() {
            for triple in graph.match_pattern(&StorePattern::any().with_subject(node)) {
                if seen.insert(triple.clone()) {
                    triples.push(triple);
                }
            }
        }
        for triple in graph.match_pattern(&StorePattern::any().with_object(resource.clone())) {
            if seen.insert(triple.clone()) {
                triples.push(triple);
            }
        }
    }
    GraphResults::new(triples)
}
