// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Model of the (n,k)-star interconnection network and a deterministic
//! routing algorithm for it.
//!
//! The (n,k)-star graph `S(n,k)` has one node for every ordered selection of
//! `k` distinct labels from `[0, n)`, giving `n!/(n-k)!` nodes. Each node has
//! `k-1` i-edges (swap position 0 with position `i`) and `n-k` 0-edges
//! (replace position 0 with an unused label).
//!
//! The crate is organised as:
//!  - [params]: the validated `(n, k)` pair.
//!  - [node]: nodes, edges and edge classification.
//!  - [enumerate]: lazy enumeration of every node in lexicographic order.
//!  - [relabel]: the label bijection that turns any destination into the
//!    identity node.
//!  - [routing]: routing to the identity and between arbitrary nodes.
//!  - [validate]: a diagnostic check of routes against the node model.
//!
//! # Example
//!
//! ```
//! use nkstar_graph::enumerate::all_nodes;
//! use nkstar_graph::params::StarParams;
//! use nkstar_graph::routing::route;
//! use nkstar_graph::validate::check_route;
//!
//! let params = StarParams::new(5, 3).unwrap();
//! let nodes: Vec<_> = all_nodes(&params).collect();
//! assert_eq!(nodes.len(), params.num_nodes());
//!
//! let (source, destination) = (&nodes[17], &nodes[42]);
//! let path = route(&params, source, destination);
//! assert!(check_route(&params, source, destination, &path).is_empty());
//! ```

pub mod enumerate;
pub mod node;
pub mod params;
pub mod relabel;
pub mod routing;
pub mod types;
pub mod validate;
