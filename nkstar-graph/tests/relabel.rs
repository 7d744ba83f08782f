// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use nkstar_graph::enumerate::all_nodes;
use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use nkstar_graph::relabel::Relabelling;
use nkstar_graph::types::Label;

#[test]
fn destination_maps_to_identity() {
    for (n, k) in [(4, 2), (5, 3), (6, 6), (7, 4)] {
        let params = StarParams::new(n, k).unwrap();
        for destination in all_nodes(&params) {
            let relabelling = Relabelling::new(n, &destination);
            assert_eq!(
                relabelling.forward_node(&destination),
                Node::identity(k),
                "{destination}"
            );
        }
    }
}

#[test]
fn reverse_is_exact_inverse() {
    let params = StarParams::new(6, 3).unwrap();
    for destination in all_nodes(&params) {
        let relabelling = Relabelling::new(6, &destination);
        assert_eq!(relabelling.n(), 6);
        for label in 0..6 as Label {
            assert_eq!(relabelling.reverse(relabelling.forward(label)), label);
            assert_eq!(relabelling.forward(relabelling.reverse(label)), label);
        }
    }
}

#[test]
fn maps_nodes_to_nodes() {
    let params = StarParams::new(5, 3).unwrap();
    let destination: Node = "[4, 1, 3]".parse().unwrap();
    let relabelling = Relabelling::new(5, &destination);

    for node in all_nodes(&params) {
        let mapped = relabelling.forward_node(&node);
        assert!(mapped.is_valid(&params));
        assert_eq!(relabelling.reverse_node(&mapped), node);
    }
}

#[test]
fn unused_labels_fill_from_k() {
    let destination: Node = "[3, 1]".parse().unwrap();
    let relabelling = Relabelling::new(5, &destination);

    // 0, 2 and 4 are not in the destination so take 2, 3 and 4 in order
    assert_eq!(relabelling.forward(3), 0);
    assert_eq!(relabelling.forward(1), 1);
    assert_eq!(relabelling.forward(0), 2);
    assert_eq!(relabelling.forward(2), 3);
    assert_eq!(relabelling.forward(4), 4);
}
