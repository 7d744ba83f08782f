// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The node and edge model of an (n,k)-star graph.
//!
//! A [Node] is an ordered sequence of `k` distinct labels drawn from `[0, n)`.
//! Two kinds of move connect nodes:
//!  - a *0-edge* replaces the label at position 0 with a label that is not
//!    currently in the node.
//!  - an *i-edge* (`1 <= i < k`) swaps the labels at position 0 and
//!    position `i`.
//!
//! Nodes are values: every move returns a new node and leaves the original
//! untouched.
//!
//! ```
//! use nkstar_graph::node::{EdgeKind, Node};
//! use nkstar_graph::params::StarParams;
//!
//! let params = StarParams::new(4, 2).unwrap();
//! let node: Node = "[1, 0]".parse().unwrap();
//!
//! let swapped = node.i_edge(1);
//! assert_eq!(swapped, Node::identity(2));
//! assert_eq!(node.edge_kind_to(&swapped, &params), Some(EdgeKind::Internal(1)));
//!
//! let replaced = node.zero_edge(3);
//! assert_eq!(format!("{replaced}"), "[3, 0]");
//! assert_eq!(node.edge_kind_to(&replaced, &params), Some(EdgeKind::Zero));
//! ```

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::params::StarParams;
use crate::star_error;
use crate::types::{Label, StarError, StarResult};

/// The type of move that connects two adjacent nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Position 0 replaced by a label not in the node
    Zero,

    /// Positions 0 and `i` swapped
    Internal(usize),
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgeKind::Zero => write!(f, "0-edge"),
            EdgeKind::Internal(i) => write!(f, "{i}-edge"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    labels: Vec<Label>,
}

impl Node {
    /// Create a node without checking it against any parameters.
    ///
    /// Use [Node::from_labels] when the labels come from outside the crate.
    #[must_use]
    pub fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Create a node, checking that it is a valid node of the graph.
    pub fn from_labels(params: &StarParams, labels: Vec<Label>) -> Result<Self, StarError> {
        let node = Self::new(labels);
        node.validate(params)?;
        Ok(node)
    }

    /// The canonical identity node `[0, 1, ..., k-1]`.
    #[must_use]
    pub fn identity(k: usize) -> Self {
        Self {
            labels: (0..k).map(|i| i as Label).collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn label(&self, position: usize) -> Label {
        self.labels[position]
    }

    #[must_use]
    pub fn contains(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    #[must_use]
    pub fn position_of(&self, label: Label) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.labels.iter().enumerate().all(|(i, l)| *l as usize == i)
    }

    /// Check that this is a node of the graph described by `params`: exactly
    /// `k` pairwise distinct labels, each less than `n`.
    pub fn validate(&self, params: &StarParams) -> StarResult {
        if self.labels.len() != params.k() {
            return star_error!(
                "{self} has {} labels, expected k={}",
                self.labels.len(),
                params.k()
            );
        }
        if let Some(label) = self.labels.iter().find(|l| **l as usize >= params.n()) {
            return star_error!("{self} contains label {label} outside [0, {})", params.n());
        }
        if let Some(label) = self.labels.iter().duplicates().next() {
            return star_error!("{self} contains label {label} more than once");
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self, params: &StarParams) -> bool {
        self.validate(params).is_ok()
    }

    /// Follow the 0-edge that brings `label` into position 0.
    ///
    /// `label` must not already be in the node.
    #[must_use]
    pub fn zero_edge(&self, label: Label) -> Self {
        debug_assert!(!self.contains(label));
        let mut labels = self.labels.clone();
        labels[0] = label;
        Self { labels }
    }

    /// Follow the i-edge that swaps positions 0 and `i`.
    ///
    /// With `i == 0` this returns an identical node.
    #[must_use]
    pub fn i_edge(&self, i: usize) -> Self {
        let mut labels = self.labels.clone();
        labels.swap(0, i);
        Self { labels }
    }

    /// Apply `f` to every label, preserving positions.
    #[must_use]
    pub fn map_labels<F>(&self, f: F) -> Self
    where
        F: Fn(Label) -> Label,
    {
        Self {
            labels: self.labels.iter().map(|l| f(*l)).collect(),
        }
    }

    /// Classify the move from this node to `other`.
    ///
    /// Returns `None` when the two are not joined by a single 0-edge or
    /// i-edge of the graph described by `params` (including when they are
    /// the same node).
    #[must_use]
    pub fn edge_kind_to(&self, other: &Node, params: &StarParams) -> Option<EdgeKind> {
        if self.len() != other.len() {
            return None;
        }

        let mut differing = self
            .labels
            .iter()
            .zip(other.labels.iter())
            .positions(|(a, b)| a != b);

        match (differing.next(), differing.next(), differing.next()) {
            (Some(0), None, None) => {
                let new_label = other.labels[0];
                let valid = (new_label as usize) < params.n() && !self.contains(new_label);
                valid.then_some(EdgeKind::Zero)
            }
            (Some(0), Some(i), None) => {
                let swapped = self.labels[0] == other.labels[i] && self.labels[i] == other.labels[0];
                swapped.then_some(EdgeKind::Internal(i))
            }
            _ => None,
        }
    }

    /// All nodes one move away: the `k-1` i-edges in position order followed
    /// by the `n-k` 0-edges in ascending label order.
    pub fn neighbours(&self, params: &StarParams) -> impl Iterator<Item = Node> {
        let internal = (1..self.len()).map(move |i| self.i_edge(i));
        let zero = (0..params.n())
            .map(|l| l as Label)
            .filter(move |l| !self.contains(*l))
            .map(move |l| self.zero_edge(l));
        internal.chain(zero)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.labels.iter().join(", "))
    }
}

impl FromStr for Node {
    type Err = StarError;

    /// Parse either `a,b,c` or `[a, b, c]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return star_error!("cannot parse an empty node from '{s}'");
        }

        let labels = inner
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<Label>()
                    .map_err(|e| StarError(format!("invalid label '{}' in '{s}': {e}", part.trim())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }
}

/// A directed edge between two adjacent nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
}

impl Edge {
    #[must_use]
    pub fn new(from: Node, to: Node) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn kind(&self, params: &StarParams) -> Option<EdgeKind> {
        self.from.edge_kind_to(&self.to, params)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
