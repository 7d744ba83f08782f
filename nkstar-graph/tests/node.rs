// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use nkstar_graph::enumerate::all_nodes;
use nkstar_graph::node::{Edge, EdgeKind, Node};
use nkstar_graph::params::StarParams;

fn node(s: &str) -> Node {
    s.parse().unwrap()
}

#[test]
fn parse_and_display() {
    assert_eq!(node("1,0,3"), Node::new(vec![1, 0, 3]));
    assert_eq!(node("[1, 0, 3]"), Node::new(vec![1, 0, 3]));
    assert_eq!(node(" [ 2 ,4 ] "), Node::new(vec![2, 4]));
    assert_eq!(format!("{}", node("3,1,2")), "[3, 1, 2]");
}

#[test]
fn parse_errors() {
    assert!("".parse::<Node>().is_err());
    assert!("[]".parse::<Node>().is_err());
    assert!("1,,2".parse::<Node>().is_err());
    assert!("1,x".parse::<Node>().is_err());
    assert!("1,256".parse::<Node>().is_err());
}

#[test]
#[should_panic(expected = "contains label 1 more than once")]
fn duplicate_label() {
    let params = StarParams::new(4, 3).unwrap();
    node("[1, 2, 1]").validate(&params).unwrap();
}

#[test]
#[should_panic(expected = "contains label 4 outside [0, 4)")]
fn label_out_of_range() {
    let params = StarParams::new(4, 3).unwrap();
    node("[1, 4, 0]").validate(&params).unwrap();
}

#[test]
#[should_panic(expected = "has 2 labels, expected k=3")]
fn wrong_length() {
    let params = StarParams::new(4, 3).unwrap();
    Node::from_labels(&params, vec![0, 1]).unwrap();
}

#[test]
fn identity() {
    assert!(Node::identity(5).is_identity());
    assert!(!node("[1, 0]").is_identity());
    assert_eq!(format!("{}", Node::identity(3)), "[0, 1, 2]");
}

#[test]
fn moves_do_not_mutate() {
    let original = node("[2, 0, 3]");
    let swapped = original.i_edge(2);
    let replaced = original.zero_edge(1);

    assert_eq!(original, node("[2, 0, 3]"));
    assert_eq!(swapped, node("[3, 0, 2]"));
    assert_eq!(replaced, node("[1, 0, 3]"));
    assert_eq!(original.i_edge(0), original);
}

#[test]
fn edge_classification() {
    let params = StarParams::new(5, 3).unwrap();
    let from = node("[2, 0, 3]");

    assert_eq!(
        from.edge_kind_to(&node("[0, 2, 3]"), &params),
        Some(EdgeKind::Internal(1))
    );
    assert_eq!(
        from.edge_kind_to(&node("[3, 0, 2]"), &params),
        Some(EdgeKind::Internal(2))
    );
    assert_eq!(
        from.edge_kind_to(&node("[4, 0, 3]"), &params),
        Some(EdgeKind::Zero)
    );

    // Not edges
    assert_eq!(from.edge_kind_to(&from, &params), None);
    assert_eq!(from.edge_kind_to(&node("[3, 0, 3]"), &params), None);
    assert_eq!(from.edge_kind_to(&node("[5, 0, 3]"), &params), None);
    assert_eq!(from.edge_kind_to(&node("[2, 3, 0]"), &params), None);
    assert_eq!(from.edge_kind_to(&node("[0, 3, 2]"), &params), None);
    assert_eq!(from.edge_kind_to(&node("[2, 0]"), &params), None);
}

#[test]
fn edge_kind_display() {
    assert_eq!(format!("{}", EdgeKind::Zero), "0-edge");
    assert_eq!(format!("{}", EdgeKind::Internal(3)), "3-edge");
}

#[test]
fn edge() {
    let params = StarParams::new(4, 2).unwrap();
    let edge = Edge::new(node("[1, 0]"), node("[0, 1]"));
    assert_eq!(edge.kind(&params), Some(EdgeKind::Internal(1)));
    assert_eq!(format!("{edge}"), "[1, 0] -> [0, 1]");
}

#[test]
fn neighbours() {
    for (n, k) in [(4, 2), (5, 3), (4, 4), (3, 1)] {
        let params = StarParams::new(n, k).unwrap();
        for from in all_nodes(&params) {
            let neighbours: Vec<Node> = from.neighbours(&params).collect();
            assert_eq!(neighbours.len(), params.degree());

            let num_internal = neighbours
                .iter()
                .filter(|to| matches!(from.edge_kind_to(to, &params), Some(EdgeKind::Internal(_))))
                .count();
            assert_eq!(num_internal, k - 1);

            for to in &neighbours {
                assert!(to.is_valid(&params));
                assert!(from.edge_kind_to(to, &params).is_some());
                assert!(to.edge_kind_to(&from, &params).is_some());
            }
        }
    }
}
