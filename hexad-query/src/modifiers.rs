//! Solution modifiers: DISTINCT, ORDER BY, OFFSET, LIMIT.

use crate::solution::Solution;
use hexad_core::Term;
use hexad_sparql::ast::{Direction, Modifiers, OrderKey};
use std::cmp::Ordering;

/// Apply the modifier pipeline in spec order: ORDER BY, then OFFSET, then
/// LIMIT. DISTINCT is applied separately (SELECT only) before ordering.
pub fn apply_modifiers(modifiers: &Modifiers, mut solutions: Vec<Solution>) -> Vec<Solution> {
    if !modifiers.order_by.is_empty() {
        solutions = order_by(&modifiers.order_by, solutions);
    }
    if let Some(offset) = modifiers.offset {
        solutions = if offset >= solutions.len() {
            Vec::new()
        } else {
            solutions.split_off(offset)
        };
    }
    if let Some(limit) = modifiers.limit {
        solutions.truncate(limit);
    }
    solutions
}

/// Remove duplicate solutions, keeping first occurrences.
pub fn distinct(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut unique: Vec<Solution> = Vec::with_capacity(solutions.len());
    for sol in solutions {
        if !unique.contains(&sol) {
            unique.push(sol);
        }
    }
    unique
}

/// Stable multi-key sort.
///
/// Keys are applied in reverse so the first key ends up primary: sorting
/// stably by the last key first, then the second-to-last, and so on,
/// leaves earlier keys dominant.
fn order_by(keys: &[OrderKey], mut solutions: Vec<Solution>) -> Vec<Solution> {
    for key in keys.iter().rev() {
        solutions.sort_by(|a, b| {
            let ordering = compare_bindings(a.get(&key.variable), b.get(&key.variable));
            match key.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
    }
    solutions
}

/// Compare two possibly-unbound order keys.
///
/// Unbound sorts before any bound term; across kinds the order is
/// IRI < BlankNode < Literal; within a kind ties break on the string form
/// (language tags and datatypes are not tiebreakers).
pub fn compare_bindings(a: Option<&Term>, b: Option<&Term>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_terms(a, b),
    }
}

fn compare_terms(a: &Term, b: &Term) -> Ordering {
    kind_rank(a)
        .cmp(&kind_rank(b))
        .then_with(|| string_form(a).cmp(string_form(b)))
}

fn kind_rank(term: &Term) -> u8 {
    match term {
        Term::Iri(_) => 0,
        Term::BlankNode(_) => 1,
        Term::Literal(_) => 2,
    }
}

fn string_form(term: &Term) -> &str {
    match term {
        Term::Iri(iri) => iri.as_str(),
        Term::BlankNode(b) => b.id(),
        Term::Literal(lit) => lit.value(),
    }
}
