// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::collections::HashSet;

use nkstar_graph::enumerate::all_nodes;
use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;

const SHAPES: [(usize, usize); 9] = [
    (1, 1),
    (3, 1),
    (2, 2),
    (4, 2),
    (3, 3),
    (5, 3),
    (6, 2),
    (7, 4),
    (6, 6),
];

#[test]
fn produces_every_node_once() {
    for (n, k) in SHAPES {
        let params = StarParams::new(n, k).unwrap();
        let nodes: Vec<Node> = all_nodes(&params).collect();
        let unique: HashSet<&Node> = nodes.iter().collect();

        assert_eq!(nodes.len(), params.num_nodes(), "S({n},{k})");
        assert_eq!(unique.len(), nodes.len(), "S({n},{k}) repeated a node");
    }
}

#[test]
fn every_node_is_valid() {
    for (n, k) in SHAPES {
        let params = StarParams::new(n, k).unwrap();
        for node in all_nodes(&params) {
            node.validate(&params).unwrap();
        }
    }
}

#[test]
fn lexicographic_order() {
    let params = StarParams::new(5, 3).unwrap();
    let nodes: Vec<Node> = all_nodes(&params).collect();

    assert_eq!(nodes.first(), Some(&Node::identity(3)));
    assert_eq!(nodes.last(), Some(&"[4, 3, 2]".parse().unwrap()));
    assert!(nodes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn restarts_fresh() {
    let params = StarParams::new(4, 2).unwrap();
    let first: Vec<Node> = all_nodes(&params).take(5).collect();
    let second: Vec<Node> = all_nodes(&params).take(5).collect();
    assert_eq!(first, second);
    assert_eq!(all_nodes(&params).count(), 12);
}
