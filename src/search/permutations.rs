//! Lazy lexicographic enumeration of column permutations.
//!
//! Each permutation of `0..n` assigns row `i` the column `perm[i]`, so every
//! candidate has distinct columns by construction and only diagonal checks
//! can reject it. The iterator keeps a single `Vec<usize>` of live state and
//! steps it in place; the full N! sequence is never materialized.

/// Iterator over all permutations of `0..n`, in lexicographic order.
///
/// Restart by constructing a fresh iterator; the sequence is deterministic.
#[derive(Clone, Debug)]
pub struct Permutations {
    cols: Vec<usize>,
    started: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            cols: (0..n).collect(),
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if !self.started {
            self.started = true;
            return Some(self.cols.clone());
        }
        if next_permutation(&mut self.cols) {
            Some(self.cols.clone())
        } else {
            None
        }
    }
}

/// Advance `a` to its lexicographic successor in place.
///
/// Returns false (leaving `a` untouched apart from being the final,
/// descending arrangement) when no successor exists.
fn next_permutation(a: &mut [usize]) -> bool {
    if a.len() < 2 {
        return false;
    }
    // Rightmost ascent a[i-1] < a[i]; none means a is the last permutation.
    let mut i = a.len() - 1;
    while i > 0 && a[i - 1] >= a[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    // Swap the pivot with the rightmost element exceeding it, then put the
    // suffix back in ascending order.
    let mut j = a.len() - 1;
    while a[j] <= a[i - 1] {
        j -= 1;
    }
    a.swap(i - 1, j);
    a[i..].reverse();
    true
}
