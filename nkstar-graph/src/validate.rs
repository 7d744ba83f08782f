// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Check a route against the node model.
//!
//! This is a diagnostic used to check routes during development and testing.
//! Problems are reported as a list of [RouteDiagnostic]s rather than as
//! errors; an empty list means the route is valid.

use std::fmt;

use itertools::Itertools;

use crate::node::Node;
use crate::params::StarParams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDiagnostic {
    /// The route contains no nodes at all
    EmptyRoute,

    /// The first node is not the source
    WrongSource { found: Node, expected: Node },

    /// The last node is not the destination
    WrongDestination { found: Node, expected: Node },

    /// Consecutive nodes `index` and `index + 1` are not joined by an edge
    NotConnected { index: usize, from: Node, to: Node },
}

impl fmt::Display for RouteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteDiagnostic::EmptyRoute => write!(f, "route is empty"),
            RouteDiagnostic::WrongSource { found, expected } => {
                write!(f, "{found} is not source {expected}")
            }
            RouteDiagnostic::WrongDestination { found, expected } => {
                write!(f, "{found} is not destination {expected}")
            }
            RouteDiagnostic::NotConnected { index, from, to } => {
                write!(f, "{from} is not connected to {to} (step {index})")
            }
        }
    }
}

/// Check that `route` starts at `source`, ends at `destination` and that
/// every consecutive pair is a 0-edge or an i-edge.
#[must_use]
pub fn check_route(
    params: &StarParams,
    source: &Node,
    destination: &Node,
    route: &[Node],
) -> Vec<RouteDiagnostic> {
    let (Some(first), Some(last)) = (route.first(), route.last()) else {
        return vec![RouteDiagnostic::EmptyRoute];
    };

    let mut diagnostics = Vec::new();
    if first != source {
        diagnostics.push(RouteDiagnostic::WrongSource {
            found: first.clone(),
            expected: source.clone(),
        });
    }
    if last != destination {
        diagnostics.push(RouteDiagnostic::WrongDestination {
            found: last.clone(),
            expected: destination.clone(),
        });
    }

    for (index, (from, to)) in route.iter().tuple_windows().enumerate() {
        if from.edge_kind_to(to, params).is_none() {
            diagnostics.push(RouteDiagnostic::NotConnected {
                index,
                from: from.clone(),
                to: to.clone(),
            });
        }
    }
    diagnostics
}

/// Returns whether [check_route] finds no problems.
#[must_use]
pub fn is_valid_route(
    params: &StarParams,
    source: &Node,
    destination: &Node,
    route: &[Node],
) -> bool {
    check_route(params, source, destination, route).is_empty()
}
