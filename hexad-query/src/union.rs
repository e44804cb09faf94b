//! UNION evaluation: both branches against the same input, results
//! concatenated and de-duplicated.

use crate::execute::evaluate;
use crate::solution::{join, Solution};
use hexad_core::Graph;
use hexad_sparql::ast::Pattern;

/// Evaluate `{ left } UNION { right }` over a set of solutions.
///
/// Each branch is evaluated independently from the empty seed, joined with
/// the incoming solutions by compatibility, and the two joined sets are
/// concatenated. Duplicates (solutions equal variable-for-variable) are
/// removed, so a triple matching both branches appears once.
pub fn step_union(
    graph: &Graph,
    left: &[Pattern],
    right: &[Pattern],
    solutions: Vec<Solution>,
) -> Vec<Solution> {
    let left_solutions = evaluate(graph, left);
    let right_solutions = evaluate(graph, right);

    let mut out = join(&solutions, &left_solutions);
    for candidate in join(&solutions, &right_solutions) {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}
