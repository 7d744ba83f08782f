// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Deterministic routing between any two nodes of an (n,k)-star graph.
//!
//! Routing is done in two layers:
//!  - [simple_route] routes any node to the identity node `[0, 1, ..., k-1]`
//!    by fixing one position at a time, left to right.
//!  - [route] relabels an arbitrary (source, destination) pair so that the
//!    destination becomes the identity, runs [simple_route], and maps the
//!    result back.
//!
//! # Fixing a position
//!
//! When position `i` is processed, positions `0..i` already hold their own
//! index. The label at position `i` falls into exactly one [MoveCase]:
//!
//! | Case           | Moves                                             |
//! |----------------|---------------------------------------------------|
//! | Identity       | none                                              |
//! | InternalCycle  | i-edge(i), i-edge(position of label i), i-edge(i)  |
//! | ExternalCycle  | i-edge(i), 0-edge(label i), i-edge(i)             |
//!
//! A move that leaves the node unchanged (swapping position 0 with itself)
//! is not added to the route. None of the moves disturbs positions `0..i`
//! for `i > 0`, so once a position is fixed it stays fixed.
//!
//! ```
//! use nkstar_graph::node::Node;
//! use nkstar_graph::params::StarParams;
//! use nkstar_graph::routing::route;
//!
//! let params = StarParams::new(4, 2).unwrap();
//! let source: Node = "[1, 0]".parse().unwrap();
//! let destination = Node::identity(2);
//!
//! let path = route(&params, &source, &destination);
//! assert_eq!(path, vec![source, destination]);
//! ```

use log::trace;

use crate::node::Node;
use crate::params::StarParams;
use crate::relabel::Relabelling;
use crate::types::{Label, Route, StarError};

/// How a single position is brought into place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCase {
    /// The position already holds its own index
    Identity,

    /// The wanted label is elsewhere in the node, at the given position
    InternalCycle(usize),

    /// The wanted label is not in the node
    ExternalCycle,
}

/// Decide how position `i` of `node` should be fixed.
#[must_use]
pub fn classify(node: &Node, i: usize) -> MoveCase {
    let wanted = i as Label;
    if node.label(i) == wanted {
        MoveCase::Identity
    } else {
        match node.position_of(wanted) {
            Some(position) => MoveCase::InternalCycle(position),
            None => MoveCase::ExternalCycle,
        }
    }
}

/// The partial route built by [simple_route] and the node it ends at.
struct Walk {
    route: Route,
    node: Node,
}

impl Walk {
    fn new(source: &Node) -> Self {
        Self {
            route: vec![source.clone()],
            node: source.clone(),
        }
    }

    /// Make a move, recording it only if it changes the node.
    fn step<F>(&mut self, make_move: F)
    where
        F: FnOnce(&Node) -> Node,
    {
        let next = make_move(&self.node);
        if next != self.node {
            self.route.push(next.clone());
            self.node = next;
        }
    }
}

/// Route from `source` to the identity node of the same length.
///
/// `source` must be a valid node. The returned route starts with `source`
/// and ends with the identity node; it has length 1 when `source` is already
/// the identity.
#[must_use]
pub fn simple_route(source: &Node) -> Route {
    let mut walk = Walk::new(source);

    for i in 0..source.len() {
        let wanted = i as Label;
        match classify(&walk.node, i) {
            MoveCase::Identity => {}
            MoveCase::InternalCycle(_) => {
                walk.step(|n| n.i_edge(i));
                // The first swap may have moved the wanted label
                let position = walk.node.position_of(wanted).unwrap_or(i);
                walk.step(|n| n.i_edge(position));
                walk.step(|n| n.i_edge(i));
            }
            MoveCase::ExternalCycle => {
                walk.step(|n| n.i_edge(i));
                walk.step(|n| n.zero_edge(wanted));
                walk.step(|n| n.i_edge(i));
            }
        }
    }

    walk.route
}

/// Route from `source` to `destination`.
///
/// Both nodes must be valid nodes of the graph described by `params`; this
/// is not checked (see [checked_route]). The route starts at `source`, ends
/// at `destination` and every consecutive pair is joined by a 0-edge or an
/// i-edge.
#[must_use]
pub fn route(params: &StarParams, source: &Node, destination: &Node) -> Route {
    let relabelling = Relabelling::new(params.n(), destination);
    let relabelled_source = relabelling.forward_node(source);

    let route: Route = simple_route(&relabelled_source)
        .iter()
        .map(|node| relabelling.reverse_node(node))
        .collect();

    trace!("{source} -> {destination}: {} nodes", route.len());
    route
}

/// As [route], but first check that both nodes belong to the graph.
pub fn checked_route(
    params: &StarParams,
    source: &Node,
    destination: &Node,
) -> Result<Route, StarError> {
    source
        .validate(params)
        .map_err(|e| StarError(format!("invalid source: {}", e.0)))?;
    destination
        .validate(params)
        .map_err(|e| StarError(format!("invalid destination: {}", e.0)))?;
    Ok(route(params, source, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(s: &str) -> Node {
        s.parse().unwrap()
    }

    #[test]
    fn classification() {
        let n = node("[0, 3, 1]");
        assert_eq!(classify(&n, 0), MoveCase::Identity);
        assert_eq!(classify(&n, 1), MoveCase::InternalCycle(2));
        assert_eq!(classify(&n, 2), MoveCase::ExternalCycle);
    }

    #[test]
    fn external_cycle_at_zero_is_single_move() {
        let route = simple_route(&node("[2, 1]"));
        assert_eq!(route, vec![node("[2, 1]"), node("[0, 1]")]);
    }

    #[test]
    fn external_cycles() {
        let route = simple_route(&node("[4, 3, 2]"));
        let expected: Vec<Node> = ["[4, 3, 2]", "[0, 3, 2]", "[3, 0, 2]", "[1, 0, 2]", "[0, 1, 2]"]
            .iter()
            .map(|s| node(s))
            .collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn internal_cycle() {
        let route = simple_route(&node("[0, 2, 1]"));
        let expected: Vec<Node> = ["[0, 2, 1]", "[2, 0, 1]", "[1, 0, 2]", "[0, 1, 2]"]
            .iter()
            .map(|s| node(s))
            .collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn identity_is_trivial() {
        assert_eq!(simple_route(&Node::identity(4)), vec![Node::identity(4)]);
    }
}
