// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Route every pair of a traffic set and accumulate node and link loads.
//!
//! The statistics form a commutative monoid: [LoadStats::default] is the
//! identity and [LoadStats::merge] the combine. Each chunk of the traffic set
//! is folded into its own [LoadStats] with no shared state, and the partial
//! results are merged at the end in whatever order the chunks complete.
//!
//! ```
//! use nkstar_graph::params::StarParams;
//! use nkstar_traffic::load::Aggregator;
//! use nkstar_traffic::strategy::Strategy;
//! use nkstar_traffic::traffic::Traffic;
//!
//! let params = StarParams::new(4, 2).unwrap();
//! let traffic = Traffic::all_to_all(&params);
//! let stats = Aggregator::new(params)
//!     .with_strategy(Strategy::Sequential)
//!     .run(&traffic)
//!     .unwrap();
//!
//! assert_eq!(stats.num_routes(), 144);
//! assert_eq!(stats.max_path_length(), 5);
//! assert_eq!(stats.average_path_length(), 3.75);
//! ```

use std::cmp::max;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;
use log::{debug, info, warn};
use nkstar_graph::node::{Edge, Node};
use nkstar_graph::params::StarParams;
use nkstar_graph::routing::route;
use nkstar_graph::star_error;
use nkstar_graph::types::{Route, StarError, StarResult};
use nkstar_graph::validate::check_route;
use rayon::prelude::*;

use crate::strategy::Strategy;
use crate::traffic::Traffic;

/// Default number of pairs routed between progress updates.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Node and edge loads plus path-length statistics for a set of routes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadStats {
    node_loads: HashMap<Node, u64>,
    edge_loads: HashMap<Edge, u64>,
    max_path_length: usize,
    total_path_length: u64,
    num_routes: u64,
    num_trivial_routes: u64,
    num_skipped: u64,
}

impl LoadStats {
    /// Add one route.
    ///
    /// Path length is counted in nodes. A route of a single node (source
    /// equals destination) counts towards the path-length statistics but
    /// loads no node or edge.
    pub fn record(&mut self, route: Route) {
        debug_assert!(!route.is_empty());
        let length = route.len();
        self.num_routes += 1;
        self.total_path_length += length as u64;
        self.max_path_length = max(self.max_path_length, length);

        if length <= 1 {
            self.num_trivial_routes += 1;
            return;
        }

        for (from, to) in route.iter().tuple_windows() {
            *self
                .edge_loads
                .entry(Edge::new(from.clone(), to.clone()))
                .or_insert(0) += 1;
        }
        for node in route {
            *self.node_loads.entry(node).or_insert(0) += 1;
        }
    }

    /// Count a pair that was not routed.
    pub fn record_skipped(&mut self) {
        self.num_skipped += 1;
    }

    /// Combine two sets of statistics.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        // Fold the smaller maps into the larger ones
        let (mut into, from) = if self.node_loads.len() >= other.node_loads.len() {
            (self, other)
        } else {
            (other, self)
        };

        merge_counts(&mut into.node_loads, from.node_loads);
        merge_counts(&mut into.edge_loads, from.edge_loads);
        into.max_path_length = max(into.max_path_length, from.max_path_length);
        into.total_path_length += from.total_path_length;
        into.num_routes += from.num_routes;
        into.num_trivial_routes += from.num_trivial_routes;
        into.num_skipped += from.num_skipped;
        into
    }

    #[must_use]
    pub fn node_loads(&self) -> &HashMap<Node, u64> {
        &self.node_loads
    }

    #[must_use]
    pub fn edge_loads(&self) -> &HashMap<Edge, u64> {
        &self.edge_loads
    }

    #[must_use]
    pub fn node_load(&self, node: &Node) -> u64 {
        self.node_loads.get(node).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn edge_load(&self, edge: &Edge) -> u64 {
        self.edge_loads.get(edge).copied().unwrap_or(0)
    }

    /// Longest route seen, in nodes.
    #[must_use]
    pub fn max_path_length(&self) -> usize {
        self.max_path_length
    }

    /// Sum of the lengths of all routes, in nodes.
    #[must_use]
    pub fn total_path_length(&self) -> u64 {
        self.total_path_length
    }

    /// Number of pairs that were routed.
    #[must_use]
    pub fn num_routes(&self) -> u64 {
        self.num_routes
    }

    /// Number of routed pairs whose route is a single node.
    #[must_use]
    pub fn num_trivial_routes(&self) -> u64 {
        self.num_trivial_routes
    }

    /// Number of pairs skipped because they were malformed or their route
    /// failed validation.
    #[must_use]
    pub fn num_skipped(&self) -> u64 {
        self.num_skipped
    }

    /// Total path length divided by the number of routed pairs.
    #[must_use]
    pub fn average_path_length(&self) -> f64 {
        if self.num_routes == 0 {
            0.0
        } else {
            self.total_path_length as f64 / self.num_routes as f64
        }
    }

    /// Check that the loads account for every hop of every route.
    ///
    /// A route of `L` nodes traverses `L-1` edges and, unless it is trivial,
    /// loads `L` nodes.
    pub fn check_conservation(&self) -> StarResult {
        let edge_sum: u64 = self.edge_loads.values().sum();
        let expected_edges = self.total_path_length.saturating_sub(self.num_routes);
        if edge_sum != expected_edges {
            return star_error!(
                "edge loads sum to {edge_sum}, expected {expected_edges} from path lengths"
            );
        }

        let node_sum: u64 = self.node_loads.values().sum();
        let expected_nodes = self.total_path_length.saturating_sub(self.num_trivial_routes);
        if node_sum != expected_nodes {
            return star_error!(
                "node loads sum to {node_sum}, expected {expected_nodes} from path lengths"
            );
        }
        Ok(())
    }
}

fn merge_counts<K>(into: &mut HashMap<K, u64>, from: HashMap<K, u64>)
where
    K: Eq + Hash,
{
    for (key, count) in from {
        match into.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += count,
            Entry::Vacant(entry) => {
                entry.insert(count);
            }
        }
    }
}

/// Runs the router over a traffic set and accumulates [LoadStats].
pub struct Aggregator<'a> {
    params: StarParams,
    strategy: Strategy,
    num_threads: usize,
    chunk_size: usize,
    validate_routes: bool,
    progress: Option<&'a (dyn Fn(usize) + Sync)>,
    abort: Option<&'a AtomicBool>,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(params: StarParams) -> Self {
        Self {
            params,
            strategy: Strategy::default(),
            num_threads: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            validate_routes: false,
            progress: None,
            abort: None,
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Number of worker threads for [Strategy::Parallel]. Zero uses the
    /// rayon global pool.
    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Number of pairs folded together before merging. Values below one are
    /// treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = max(chunk_size, 1);
        self
    }

    /// Check every route with [check_route] and skip those that fail.
    #[must_use]
    pub fn with_route_validation(mut self, validate_routes: bool) -> Self {
        self.validate_routes = validate_routes;
        self
    }

    /// Called with the number of pairs completed each time a chunk finishes.
    #[must_use]
    pub fn with_progress(mut self, progress: &'a (dyn Fn(usize) + Sync)) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Stop the run (with an error) once `abort` is set.
    #[must_use]
    pub fn with_abort(mut self, abort: &'a AtomicBool) -> Self {
        self.abort = Some(abort);
        self
    }

    /// Route every pair of `traffic` and return the combined statistics.
    pub fn run(&self, traffic: &Traffic) -> Result<LoadStats, StarError> {
        info!(
            "Routing {} pairs over {} nodes of {} ({} strategy)",
            traffic.len(),
            traffic.nodes().len(),
            self.params,
            self.strategy
        );

        // Check every distinct endpoint once rather than once per pair
        let valid_nodes: Vec<bool> = traffic
            .nodes()
            .iter()
            .map(|node| match node.validate(&self.params) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping pairs using malformed node: {}", e.0);
                    false
                }
            })
            .collect();

        let fold_chunk =
            |chunk: &[(usize, usize)]| self.fold_chunk(traffic, &valid_nodes, chunk);
        let pairs = traffic.index_pairs();

        let stats = match self.strategy {
            Strategy::Sequential => pairs
                .chunks(self.chunk_size)
                .map(fold_chunk)
                .try_fold(LoadStats::default(), |acc, partial| {
                    Ok::<_, StarError>(acc.merge(partial?))
                })?,
            Strategy::Parallel => {
                let run = || {
                    pairs
                        .par_chunks(self.chunk_size)
                        .map(fold_chunk)
                        .try_reduce(LoadStats::default, |a, b| Ok(a.merge(b)))
                };
                if self.num_threads == 0 {
                    run()?
                } else {
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(self.num_threads)
                        .build()
                        .map_err(|e| StarError(format!("unable to build thread pool: {e}")))?
                        .install(run)?
                }
            }
        };

        info!(
            "Routed {} pairs ({} skipped): max path length {}, average {:.4}",
            stats.num_routes(),
            stats.num_skipped(),
            stats.max_path_length(),
            stats.average_path_length()
        );
        Ok(stats)
    }

    fn fold_chunk(
        &self,
        traffic: &Traffic,
        valid_nodes: &[bool],
        chunk: &[(usize, usize)],
    ) -> Result<LoadStats, StarError> {
        if self.abort.is_some_and(|abort| abort.load(Ordering::Relaxed)) {
            return star_error!("aggregation aborted");
        }

        let nodes = traffic.nodes();
        let mut stats = LoadStats::default();
        for &(s, d) in chunk {
            if !(valid_nodes[s] && valid_nodes[d]) {
                stats.record_skipped();
                continue;
            }

            let (source, destination) = (&nodes[s], &nodes[d]);
            let path = route(&self.params, source, destination);
            if self.validate_routes {
                let diagnostics = check_route(&self.params, source, destination, &path);
                if !diagnostics.is_empty() {
                    for diagnostic in &diagnostics {
                        warn!("{source} -> {destination}: {diagnostic}");
                    }
                    stats.record_skipped();
                    continue;
                }
            }
            stats.record(path);
        }

        debug!("Chunk of {} pairs done", chunk.len());
        if let Some(progress) = self.progress {
            progress(chunk.len());
        }
        Ok(stats)
    }
}

/// Route every pair of `traffic` with the default [Aggregator] settings.
pub fn aggregate(params: StarParams, traffic: &Traffic) -> Result<LoadStats, StarError> {
    Aggregator::new(params).run(traffic)
}
