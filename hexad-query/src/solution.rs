//! Solutions: variable-to-term bindings.
//!
//! A solution is a partial mapping from variable name to term. Two
//! solutions are *compatible* when they agree on every variable bound in
//! both; compatible solutions can be merged. These two operations are the
//! basis of every join in the executor.

use hexad_core::Term;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A partial mapping from variable name to term.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    bindings: FxHashMap<Arc<str>, Term>,
}

impl Solution {
    /// The empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound term for a variable, if any.
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.bindings.get(variable)
    }

    /// Whether the variable is bound.
    pub fn is_bound(&self, variable: &str) -> bool {
        self.bindings.contains_key(variable)
    }

    /// Bind a variable, replacing any previous binding.
    pub fn bind(&mut self, variable: Arc<str>, term: Term) {
        self.bindings.insert(variable, term);
    }

    /// Bind a variable only if consistent with an existing binding.
    ///
    /// Returns `false` (leaving the solution unchanged) when the variable
    /// is already bound to a different term.
    pub fn try_bind(&mut self, variable: &Arc<str>, term: Term) -> bool {
        match self.bindings.get(variable) {
            Some(existing) => *existing == term,
            None => {
                self.bindings.insert(variable.clone(), term);
                true
            }
        }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over (variable, term) bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Term)> {
        self.bindings.iter()
    }

    /// Whether this solution agrees with `other` on every variable bound
    /// in both.
    pub fn is_compatible(&self, other: &Solution) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .bindings
            .iter()
            .all(|(var, term)| large.get(var).map_or(true, |t| t == term))
    }

    /// Merge `other` into a copy of this solution.
    ///
    /// On conflict this solution's binding wins; with compatible inputs no
    /// conflict can occur.
    pub fn merge(&self, other: &Solution) -> Solution {
        let mut merged = self.clone();
        for (var, term) in &other.bindings {
            merged
                .bindings
                .entry(var.clone())
                .or_insert_with(|| term.clone());
        }
        merged
    }

    /// Restrict this solution to the given variables, dropping the rest.
    pub fn project(&self, variables: &[Arc<str>]) -> Solution {
        let mut projected = Solution::new();
        for var in variables {
            if let Some(term) = self.bindings.get(var) {
                projected.bindings.insert(var.clone(), term.clone());
            }
        }
        projected
    }
}

/// Join two solution sets on compatibility, merging each compatible pair.
pub fn join(left: &[Solution], right: &[Solution]) -> Vec<Solution> {
    let mut out = Vec::new();
    for sigma in left {
        for tau in right {
            if sigma.is_compatible(tau) {
                out.push(sigma.merge(tau));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_core::{Iri, Literal};

    fn term(s: &str) -> Term {
        Term::Iri(Iri::new(s).unwrap())
    }

    fn var(s: &str) -> Arc<str> {
        Arc::from(s)
    }

    #[test]
    fn test_bind_and_get() {
        let mut sol = Solution::new();
        sol.bind(var("x"), term("http://example.org/a"));
        assert!(sol.is_bound("x"));
        assert!(!sol.is_bound("y"));
        assert_eq!(sol.get("x"), Some(&term("http://example.org/a")));
    }

    #[test]
    fn test_try_bind_consistency() {
        let mut sol = Solution::new();
        assert!(sol.try_bind(&var("x"), term("http://example.org/a")));
        assert!(sol.try_bind(&var("x"), term("http://example.org/a")));
        assert!(!sol.try_bind(&var("x"), term("http://example.org/b")));
        assert_eq!(sol.get("x"), Some(&term("http://example.org/a")));
    }

    #[test]
    fn test_compatibility() {
        let mut a = Solution::new();
        a.bind(var("x"), term("http://example.org/1"));
        a.bind(var("y"), term("http://example.org/2"));

        let mut b = Solution::new();
        b.bind(var("y"), term("http://example.org/2"));
        b.bind(var("z"), term("http://example.org/3"));

        assert!(a.is_compatible(&b));
        assert!(b.is_compatible(&a));

        let mut c = Solution::new();
        c.bind(var("y"), term("http://example.org/other"));
        assert!(!a.is_compatible(&c));

        // Disjoint solutions are always compatible
        assert!(a.is_compatible(&Solution::new()));
    }

    #[test]
    fn test_merge_keeps_left_on_conflict() {
        let mut a = Solution::new();
        a.bind(var("x"), Term::Literal(Literal::plain("left")));
        let mut b = Solution::new();
        b.bind(var("x"), Term::Literal(Literal::plain("right")));
        b.bind(var("y"), Term::Literal(Literal::plain("extra")));

        let merged = a.merge(&b);
        assert_eq!(merged.get("x"), Some(&Term::Literal(Literal::plain("left"))));
        assert_eq!(merged.get("y"), Some(&Term::Literal(Literal::plain("extra"))));
    }

    #[test]
    fn test_project_drops_unlisted_and_unbound() {
        let mut sol = Solution::new();
        sol.bind(var("x"), term("http://example.org/1"));
        sol.bind(var("y"), term("http://example.org/2"));

        let projected = sol.project(&[var("x"), var("missing")]);
        assert_eq!(projected.len(), 1);
        assert!(projected.is_bound("x"));
        assert!(!projected.is_bound("y"));
    }

    #[test]
    fn test_join() {
        let mut a1 = Solution::new();
        a1.bind(var("x"), term("http://example.org/1"));
        let mut a2 = Solution::new();
        a2.bind(var("x"), term("http://example.org/2"));

        let mut b = Solution::new();
        b.bind(var("x"), term("http://example.org/1"));
        b.bind(var("y"), term("http://example.org/3"));

        let joined = join(&[a1, a2], &[b]);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].get("y"), Some(&term("http://example.org/3")));
    }
}
