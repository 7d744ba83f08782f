// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Traffic generation and link-load aggregation for (n,k)-star networks.
//!
//! A [traffic::Traffic] set of (source, destination) pairs is routed pair by
//! pair with [nkstar_graph::routing::route] and every route is accumulated
//! into [load::LoadStats]: how many routes pass through each node and along
//! each directed edge, plus path-length statistics.
//!
//!  - [traffic]: all-to-all and random traffic sets.
//!  - [strategy]: sequential or rayon-parallel execution.
//!  - [load]: the [load::Aggregator] and its [load::LoadStats].
//!  - [summary]: histograms of load values, split by edge kind.
//!
//! # Example
//!
//! ```
//! use nkstar_graph::params::StarParams;
//! use nkstar_traffic::load::aggregate;
//! use nkstar_traffic::summary::LoadSummary;
//! use nkstar_traffic::traffic::Traffic;
//!
//! let params = StarParams::new(4, 2).unwrap();
//! let stats = aggregate(params, &Traffic::all_to_all(&params)).unwrap();
//! let summary = LoadSummary::new(&params, &stats);
//!
//! // Every node carries the same load under all-to-all traffic
//! assert_eq!(summary.node_histogram.len(), 1);
//! assert_eq!(summary.max_node_load(), 44);
//! ```

pub mod load;
pub mod strategy;
pub mod summary;
pub mod traffic;
