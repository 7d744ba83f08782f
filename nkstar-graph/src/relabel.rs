// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The relabelling that reduces any routing problem to routing towards the
//! identity node.
//!
//! The (n,k)-star graph is node symmetric: any bijection of the label space
//! maps edges to edges of the same kind. Given a destination, a
//! [Relabelling] is built such that the destination becomes the identity node
//! `[0, 1, ..., k-1]`. Routes found in the relabelled space are carried back
//! with the inverse map.
//!
//! Labels of the destination are fixed by position. The `n-k` labels absent
//! from the destination are assigned the outputs `k, k+1, ..., n-1` in
//! ascending label order.
//!
//! ```
//! use nkstar_graph::node::Node;
//! use nkstar_graph::relabel::Relabelling;
//!
//! let destination: Node = "[1, 2, 4, 0]".parse().unwrap();
//! let relabelling = Relabelling::new(7, &destination);
//!
//! assert_eq!(relabelling.forward_node(&destination), Node::identity(4));
//! assert_eq!(relabelling.forward(3), 4);
//! assert_eq!(relabelling.reverse(4), 3);
//! ```

use crate::node::Node;
use crate::types::Label;

/// A bijection over `[0, n)` with its exact inverse.
///
/// Both directions are held as arrays indexed by label so that
/// `forward[reverse[x]] == x` and `reverse[forward[x]] == x` for every `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relabelling {
    forward: Vec<Label>,
    reverse: Vec<Label>,
}

impl Relabelling {
    /// Build the relabelling that maps `destination` onto the identity node.
    ///
    /// `destination` must be a valid node with labels in `[0, n)`.
    #[must_use]
    pub fn new(n: usize, destination: &Node) -> Self {
        let k = destination.len();
        let mut assigned = vec![None; n];
        for (position, label) in destination.labels().iter().enumerate() {
            assigned[*label as usize] = Some(position as Label);
        }

        let mut next_unused = k;
        let forward: Vec<Label> = assigned
            .into_iter()
            .map(|mapped| {
                mapped.unwrap_or_else(|| {
                    let label = next_unused as Label;
                    next_unused += 1;
                    label
                })
            })
            .collect();

        let mut reverse = vec![0; n];
        for (label, mapped) in forward.iter().enumerate() {
            reverse[*mapped as usize] = label as Label;
        }

        Self { forward, reverse }
    }

    /// The size of the label space.
    #[must_use]
    pub fn n(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn forward(&self, label: Label) -> Label {
        self.forward[label as usize]
    }

    #[must_use]
    pub fn reverse(&self, label: Label) -> Label {
        self.reverse[label as usize]
    }

    /// Map a node from the original label space into the relabelled one.
    #[must_use]
    pub fn forward_node(&self, node: &Node) -> Node {
        node.map_labels(|l| self.forward(l))
    }

    /// Map a node from the relabelled space back to the original one.
    #[must_use]
    pub fn reverse_node(&self, node: &Node) -> Node {
        node.map_labels(|l| self.reverse(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_labels_ascending() {
        let destination: Node = "[1, 2, 4, 0]".parse().unwrap();
        let relabelling = Relabelling::new(7, &destination);

        assert_eq!(relabelling.forward, vec![3, 0, 1, 4, 2, 5, 6]);
        assert_eq!(relabelling.reverse, vec![1, 2, 4, 0, 3, 5, 6]);
    }

    #[test]
    fn identity_destination() {
        let relabelling = Relabelling::new(5, &Node::identity(3));
        for label in 0..5 {
            assert_eq!(relabelling.forward(label), label);
            assert_eq!(relabelling.reverse(label), label);
        }
    }
}
