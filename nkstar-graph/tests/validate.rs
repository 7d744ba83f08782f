// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use nkstar_graph::validate::{RouteDiagnostic, check_route, is_valid_route};

fn node(s: &str) -> Node {
    s.parse().unwrap()
}

fn nodes(strs: &[&str]) -> Vec<Node> {
    strs.iter().map(|s| node(s)).collect()
}

#[test]
fn valid_route() {
    let params = StarParams::new(5, 3).unwrap();
    let route = nodes(&["[4, 3, 2]", "[0, 3, 2]", "[3, 0, 2]", "[1, 0, 2]", "[0, 1, 2]"]);
    assert!(is_valid_route(&params, &route[0], &route[4], &route));
}

#[test]
fn empty_route() {
    let params = StarParams::new(4, 2).unwrap();
    let diagnostics = check_route(&params, &node("[0, 1]"), &node("[1, 0]"), &[]);
    assert_eq!(diagnostics, vec![RouteDiagnostic::EmptyRoute]);
}

#[test]
fn wrong_endpoints() {
    let params = StarParams::new(4, 2).unwrap();
    let route = nodes(&["[1, 0]", "[0, 1]"]);
    let diagnostics = check_route(&params, &node("[2, 0]"), &node("[3, 1]"), &route);
    assert_eq!(
        diagnostics,
        vec![
            RouteDiagnostic::WrongSource {
                found: node("[1, 0]"),
                expected: node("[2, 0]"),
            },
            RouteDiagnostic::WrongDestination {
                found: node("[0, 1]"),
                expected: node("[3, 1]"),
            },
        ]
    );
}

#[test]
fn disconnected_step() {
    let params = StarParams::new(4, 3).unwrap();
    let route = nodes(&["[0, 1, 2]", "[1, 0, 2]", "[1, 2, 0]", "[3, 2, 0]"]);
    let diagnostics = check_route(&params, &route[0], &route[3], &route);
    assert_eq!(
        diagnostics,
        vec![RouteDiagnostic::NotConnected {
            index: 1,
            from: node("[1, 0, 2]"),
            to: node("[1, 2, 0]"),
        }]
    );
    assert_eq!(
        format!("{}", diagnostics[0]),
        "[1, 0, 2] is not connected to [1, 2, 0] (step 1)"
    );
}

#[test]
fn repeated_node_is_not_an_edge() {
    let params = StarParams::new(4, 2).unwrap();
    let route = nodes(&["[1, 0]", "[1, 0]", "[0, 1]"]);
    assert!(!is_valid_route(&params, &route[0], &route[2], &route));
}
