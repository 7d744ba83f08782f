// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Route traffic over an (n,k)-star network and report node and link loads.
//!
//! By default every node sends to every node (including itself) over the
//! S(7,4) network, and the application prints histograms of node loads and
//! directed-edge loads together with the maximum and average path lengths.
//!
//! # Examples
//!
//! Running the default all-to-all aggregation with a progress bar
//! ```text
//! cargo run --bin sim-nkstar --release -- --progress
//! ```
//!
//! A smaller network with a random traffic pattern, routed on one thread
//! ```text
//! cargo run --bin sim-nkstar --release -- -n 6 -k 3 --pattern random --num-pairs 5000 --seed 3 --strategy sequential
//! ```
//!
//! Printing and checking a single route
//! ```text
//! cargo run --bin sim-nkstar -- --source 3,6,0,5 --destination 1,2,4,0
//! ```
//!
//! See [config] for the other ways of setting these options.

pub mod config;
pub mod report;
