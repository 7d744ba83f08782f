// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Text output of routes and load summaries.

use std::io::{self, Write};

use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use nkstar_graph::validate::RouteDiagnostic;
use nkstar_traffic::summary::{Histogram, LoadSummary};

/// Print a route one node per line, with the kind of edge taken to reach it.
pub fn write_route<W: Write>(out: &mut W, params: &StarParams, route: &[Node]) -> io::Result<()> {
    writeln!(out, "Route of {} nodes in {params}:", route.len())?;

    let mut previous: Option<&Node> = None;
    for node in route {
        match previous.and_then(|p| p.edge_kind_to(node, params)) {
            Some(kind) => writeln!(out, "  {node}  ({kind})")?,
            None => writeln!(out, "  {node}")?,
        }
        previous = Some(node);
    }
    Ok(())
}

pub fn write_diagnostics<W: Write>(
    out: &mut W,
    diagnostics: &[RouteDiagnostic],
) -> io::Result<()> {
    if diagnostics.is_empty() {
        return writeln!(out, "Route is valid");
    }
    for diagnostic in diagnostics {
        writeln!(out, "Invalid route: {diagnostic}")?;
    }
    Ok(())
}

fn write_histogram<W: Write>(
    out: &mut W,
    title: &str,
    unit: &str,
    histogram: &Histogram,
) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    if histogram.is_empty() {
        return writeln!(out, "  none");
    }
    for (load, count) in histogram {
        writeln!(out, "  load {load:>10}: {count} {unit}")?;
    }
    Ok(())
}

/// Print the load histograms and path-length statistics of a run.
pub fn write_summary<W: Write>(
    out: &mut W,
    params: &StarParams,
    summary: &LoadSummary,
) -> io::Result<()> {
    writeln!(
        out,
        "{params}: {} nodes, {} routes, {} skipped",
        params.num_nodes(),
        summary.num_routes,
        summary.num_skipped
    )?;
    write_histogram(out, "Node loads", "nodes", &summary.node_histogram)?;
    write_histogram(out, "Edge loads", "edges", &summary.edge_histogram)?;
    write_histogram(out, "0-edge loads", "edges", &summary.zero_edge_histogram)?;
    write_histogram(out, "i-edge loads", "edges", &summary.internal_edge_histogram)?;
    writeln!(out, "Max path length: {}", summary.max_path_length)?;
    writeln!(out, "Average path length: {}", summary.average_path_length)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use nkstar_traffic::load::aggregate;
    use nkstar_traffic::traffic::Traffic;

    use super::*;

    #[test]
    fn summary_text() {
        let params = StarParams::new(4, 2).unwrap();
        let stats = aggregate(params, &Traffic::all_to_all(&params)).unwrap();
        let summary = LoadSummary::new(&params, &stats);

        let mut out = Vec::new();
        write_summary(&mut out, &params, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("S(4,2): 12 nodes, 144 routes, 0 skipped\n"));
        assert!(text.contains("Node loads:\n  load         44: 12 nodes\n"));
        assert!(text.contains("0-edge loads:\n  load          7: 24 edges\n"));
        assert!(text.contains("i-edge loads:\n  load         19: 12 edges\n"));
        assert!(text.contains("Max path length: 5\n"));
        assert!(text.ends_with("Average path length: 3.75\n"));
    }

    #[test]
    fn route_text() {
        let params = StarParams::new(4, 2).unwrap();
        let route: Vec<Node> = ["[2, 0]", "[1, 0]", "[0, 1]"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut out = Vec::new();
        write_route(&mut out, &params, &route).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Route of 3 nodes in S(4,2):\n  [2, 0]\n  [1, 0]  (0-edge)\n  [0, 1]  (1-edge)\n"
        );
    }

    #[test]
    fn diagnostics_text() {
        let mut out = Vec::new();
        write_diagnostics(&mut out, &[RouteDiagnostic::EmptyRoute]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Invalid route: route is empty\n");
    }
}
