// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The two integer parameters that define an (n,k)-star graph.
//!
//! `n` is the size of the label space and `k` the number of labels held by
//! each node. Every other part of the crate assumes a [StarParams] that has
//! been through [StarParams::new], so parameter violations are rejected here
//! before any routing takes place.

use std::fmt;

use crate::star_error;
use crate::types::{Label, StarError};

/// Labels are stored as [Label] so the label space cannot exceed this.
pub const MAX_LABELS: usize = Label::MAX as usize + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StarParams {
    /// Size of the label space
    n: usize,

    /// Number of labels in each node
    k: usize,
}

impl StarParams {
    /// Create a validated set of parameters.
    ///
    /// Requires `1 <= k <= n <= MAX_LABELS` and that the number of nodes,
    /// `n!/(n-k)!`, fits in a `usize`.
    pub fn new(n: usize, k: usize) -> Result<Self, StarError> {
        if n < 1 {
            return star_error!("n must be at least 1 (got n={n})");
        }
        if k < 1 {
            return star_error!("k must be at least 1 (got k={k})");
        }
        if k > n {
            return star_error!("k must not exceed n (got n={n}, k={k})");
        }
        if n > MAX_LABELS {
            return star_error!("n must not exceed {MAX_LABELS} (got n={n})");
        }
        if num_k_permutations(n, k).is_none() {
            return star_error!("number of nodes for n={n}, k={k} overflows");
        }
        Ok(Self { n, k })
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of nodes in the graph, `n!/(n-k)!`.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        // Checked at construction
        num_k_permutations(self.n, self.k).unwrap_or(usize::MAX)
    }

    /// Returns the degree of every node: `k-1` i-edges plus `n-k` 0-edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.n - 1
    }
}

impl fmt::Display for StarParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "S({},{})", self.n, self.k)
    }
}

fn num_k_permutations(n: usize, k: usize) -> Option<usize> {
    ((n - k + 1)..=n).try_fold(1usize, |acc, x| acc.checked_mul(x))
}
