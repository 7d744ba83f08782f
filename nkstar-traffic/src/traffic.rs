// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Traffic sets: ordered (source, destination) pairs of nodes.
//!
//! A [Traffic] holds the enumerated nodes once and the pairs as indices into
//! them, so that the full all-to-all set of `M^2` pairs does not hold `2 M^2`
//! copies of nodes. [Traffic::sources] and [Traffic::destinations] expose
//! the two aligned sequences.

use std::fmt;

use nkstar_graph::enumerate::all_nodes;
use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficPattern {
    /// Every node sends to every node, including itself
    #[default]
    AllToAll,

    /// A fixed number of pairs chosen uniformly at random
    Random,
}

impl fmt::Display for TrafficPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

pub struct Traffic {
    nodes: Vec<Node>,
    pairs: Vec<(usize, usize)>,
}

impl Traffic {
    /// Build a traffic set from nodes and index pairs.
    ///
    /// Nodes are not checked against any parameters, and every index must be
    /// less than `nodes.len()`.
    #[must_use]
    pub fn new(nodes: Vec<Node>, pairs: Vec<(usize, usize)>) -> Self {
        debug_assert!(
            pairs
                .iter()
                .all(|(s, d)| *s < nodes.len() && *d < nodes.len())
        );
        Self { nodes, pairs }
    }

    /// Every ordered pair of nodes, sources in the outer loop and
    /// destinations in the inner loop, both in enumeration order.
    #[must_use]
    pub fn all_to_all(params: &StarParams) -> Self {
        let nodes: Vec<Node> = all_nodes(params).collect();
        let num_nodes = nodes.len();
        let pairs = (0..num_nodes)
            .flat_map(|s| (0..num_nodes).map(move |d| (s, d)))
            .collect();
        Self { nodes, pairs }
    }

    /// `num_pairs` pairs drawn uniformly (with replacement) from all ordered
    /// pairs of nodes. The same seed always gives the same pairs.
    #[must_use]
    pub fn random(params: &StarParams, num_pairs: usize, seed: u64) -> Self {
        let nodes: Vec<Node> = all_nodes(params).collect();
        let num_nodes = nodes.len();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let pairs = (0..num_pairs)
            .map(|_| (rng.gen_range(0..num_nodes), rng.gen_range(0..num_nodes)))
            .collect();
        Self { nodes, pairs }
    }

    /// Build the traffic set for `pattern`. `num_pairs` and `seed` are only
    /// used by [TrafficPattern::Random].
    #[must_use]
    pub fn from_pattern(
        params: &StarParams,
        pattern: TrafficPattern,
        num_pairs: usize,
        seed: u64,
    ) -> Self {
        match pattern {
            TrafficPattern::AllToAll => Self::all_to_all(params),
            TrafficPattern::Random => Self::random(params, num_pairs, seed),
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn index_pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pair(&self, i: usize) -> (&Node, &Node) {
        let (s, d) = self.pairs[i];
        (&self.nodes[s], &self.nodes[d])
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.pairs
            .iter()
            .map(|(s, d)| (&self.nodes[*s], &self.nodes[*d]))
    }

    pub fn sources(&self) -> impl Iterator<Item = &Node> {
        self.pairs.iter().map(|(s, _)| &self.nodes[*s])
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Node> {
        self.pairs.iter().map(|(_, d)| &self.nodes[*d])
    }
}
