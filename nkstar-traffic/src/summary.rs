// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Condense [LoadStats] into histograms of load values.
//!
//! Each histogram maps a load value to the number of nodes (or directed
//! edges) carrying exactly that load. Under all-to-all traffic the graph's
//! symmetry leaves only a handful of distinct values, so the histograms are
//! the usual way of reporting a run.

use std::collections::BTreeMap;

use log::warn;
use nkstar_graph::node::EdgeKind;
use nkstar_graph::params::StarParams;

use crate::load::LoadStats;

/// Load value to number of elements carrying it.
pub type Histogram = BTreeMap<u64, usize>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadSummary {
    pub node_histogram: Histogram,
    pub edge_histogram: Histogram,
    pub zero_edge_histogram: Histogram,
    pub internal_edge_histogram: Histogram,
    pub max_path_length: usize,
    pub average_path_length: f64,
    pub total_path_length: u64,
    pub num_routes: u64,
    pub num_skipped: u64,
}

impl LoadSummary {
    #[must_use]
    pub fn new(params: &StarParams, stats: &LoadStats) -> Self {
        let mut summary = Self {
            max_path_length: stats.max_path_length(),
            average_path_length: stats.average_path_length(),
            total_path_length: stats.total_path_length(),
            num_routes: stats.num_routes(),
            num_skipped: stats.num_skipped(),
            ..Default::default()
        };

        for load in stats.node_loads().values() {
            *summary.node_histogram.entry(*load).or_insert(0) += 1;
        }

        for (edge, load) in stats.edge_loads() {
            *summary.edge_histogram.entry(*load).or_insert(0) += 1;
            match edge.kind(params) {
                Some(EdgeKind::Zero) => {
                    *summary.zero_edge_histogram.entry(*load).or_insert(0) += 1;
                }
                Some(EdgeKind::Internal(_)) => {
                    *summary.internal_edge_histogram.entry(*load).or_insert(0) += 1;
                }
                None => warn!("Load recorded on non-edge {edge}"),
            }
        }

        summary
    }

    /// Number of nodes that carry any load.
    #[must_use]
    pub fn num_loaded_nodes(&self) -> usize {
        self.node_histogram.values().sum()
    }

    /// Number of directed edges that carry any load.
    #[must_use]
    pub fn num_loaded_edges(&self) -> usize {
        self.edge_histogram.values().sum()
    }

    #[must_use]
    pub fn max_node_load(&self) -> u64 {
        self.node_histogram.keys().next_back().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max_edge_load(&self) -> u64 {
        self.edge_histogram.keys().next_back().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use nkstar_graph::node::{Edge, Node};

    use super::*;

    fn node(s: &str) -> Node {
        s.parse().unwrap()
    }

    #[test]
    fn splits_edges_by_kind() {
        let params = StarParams::new(3, 2).unwrap();
        let mut stats = LoadStats::default();
        // i-edge then 0-edge
        stats.record(vec![node("[1, 0]"), node("[0, 1]"), node("[2, 1]")]);
        stats.record(vec![node("[1, 0]"), node("[0, 1]")]);

        let summary = LoadSummary::new(&params, &stats);
        assert_eq!(summary.internal_edge_histogram, Histogram::from([(2, 1)]));
        assert_eq!(summary.zero_edge_histogram, Histogram::from([(1, 1)]));
        assert_eq!(summary.edge_histogram, Histogram::from([(1, 1), (2, 1)]));
        assert_eq!(summary.node_histogram, Histogram::from([(1, 1), (2, 2)]));
        assert_eq!(summary.num_loaded_nodes(), 3);
        assert_eq!(summary.num_loaded_edges(), 2);
        assert_eq!(summary.max_edge_load(), 2);
        assert_eq!(summary.max_node_load(), 2);
        assert_eq!(
            stats.edge_load(&Edge::new(node("[0, 1]"), node("[2, 1]"))),
            1
        );
    }

    #[test]
    fn empty() {
        let params = StarParams::new(3, 2).unwrap();
        let summary = LoadSummary::new(&params, &LoadStats::default());
        assert_eq!(summary.max_node_load(), 0);
        assert_eq!(summary.num_loaded_edges(), 0);
        assert_eq!(summary.average_path_length, 0.0);
    }
}
