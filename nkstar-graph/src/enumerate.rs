// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Enumerate every node of an (n,k)-star graph exactly once.
//!
//! The enumeration walks all of `[0, n)^k` in lexicographic order with an
//! odometer (increment the rightmost digit, carrying to the left) and keeps
//! only the candidates whose labels are pairwise distinct. Nodes are
//! therefore produced in lexicographic order, starting with the identity
//! node `[0, 1, ..., k-1]`.

use std::iter::FusedIterator;

use itertools::Itertools;

use crate::node::Node;
use crate::params::StarParams;
use crate::types::Label;

/// A lazy iterator over all nodes of the graph.
///
/// Each call to [all_nodes] starts a fresh enumeration.
pub struct NodeEnumerator {
    n: usize,
    digits: Vec<Label>,
    started: bool,
    exhausted: bool,
}

impl NodeEnumerator {
    #[must_use]
    pub fn new(params: &StarParams) -> Self {
        Self {
            n: params.n(),
            digits: Node::identity(params.k()).labels().to_vec(),
            started: false,
            exhausted: false,
        }
    }

    /// Advance the odometer to the next candidate.
    ///
    /// Returns `false` once a carry runs out of the leftmost digit.
    fn increment(&mut self) -> bool {
        let max_digit = (self.n - 1) as Label;
        for i in (0..self.digits.len()).rev() {
            if self.digits[i] < max_digit {
                self.digits[i] += 1;
                self.digits[i + 1..].fill(0);
                return true;
            }
        }
        false
    }

    fn is_permutation(&self) -> bool {
        self.digits.iter().all_unique()
    }
}

impl Iterator for NodeEnumerator {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(Node::new(self.digits.clone()));
        }

        while self.increment() {
            if self.is_permutation() {
                return Some(Node::new(self.digits.clone()));
            }
        }

        self.exhausted = true;
        None
    }
}

impl FusedIterator for NodeEnumerator {}

/// Returns a fresh enumeration of every node.
#[must_use]
pub fn all_nodes(params: &StarParams) -> NodeEnumerator {
    NodeEnumerator::new(params)
}
