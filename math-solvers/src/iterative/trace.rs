//! Per-iteration record of the Jacobi iterates
//!
//! Entry `k` is the iterate produced by sweep `k + 1`; the initial guess is
//! never recorded. Consumers (animation, diagnostics) rely on the order being
//! chronological and on the last entry being the returned solution.

use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Upper bound on the number of scalars reserved up front for a trace
const MAX_RESERVED_SCALARS: usize = 1 << 22;

/// Chronological sequence of iterates, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct IterationTrace<T: RealField> {
    dim: usize,
    iterates: Vec<Array1<T>>,
}

impl<T: RealField> IterationTrace<T> {
    /// Create an empty trace able to hold up to `max_iterations` iterates of length `dim`
    ///
    /// Capacity is a hint only; storage grows past it if needed and at most
    /// a bounded number of scalars is reserved.
    pub fn with_capacity(dim: usize, max_iterations: usize) -> Self {
        let reserve = if dim == 0 {
            max_iterations
        } else {
            max_iterations.min(MAX_RESERVED_SCALARS / dim)
        };
        Self {
            dim,
            iterates: Vec::with_capacity(reserve),
        }
    }

    /// Append the iterate of the sweep that just completed
    pub(crate) fn push(&mut self, iterate: Array1<T>) {
        debug_assert_eq!(iterate.len(), self.dim);
        self.iterates.push(iterate);
    }

    /// Number of recorded iterates
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// True when no sweep was recorded
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Length of each iterate
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterate produced by sweep `k + 1`
    pub fn get(&self, k: usize) -> Option<&Array1<T>> {
        self.iterates.get(k)
    }

    /// Most recent iterate
    pub fn last(&self) -> Option<&Array1<T>> {
        self.iterates.last()
    }

    /// Iterates in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &Array1<T>> {
        self.iterates.iter()
    }

    /// Stack the iterates as rows of an `len × dim` matrix
    pub fn to_matrix(&self) -> Array2<T> {
        let mut out = Array2::zeros((self.iterates.len(), self.dim));
        for (mut row, iterate) in out.outer_iter_mut().zip(self.iterates.iter()) {
            row.assign(iterate);
        }
        out
    }

    /// Consume the trace, returning the iterates
    pub fn into_vec(self) -> Vec<Array1<T>> {
        self.iterates
    }
}

impl<'a, T: RealField> IntoIterator for &'a IterationTrace<T> {
    type Item = &'a Array1<T>;
    type IntoIter = std::slice::Iter<'a, Array1<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.iter()
    }
}
