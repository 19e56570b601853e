use std::io::{self, Write};

use matrix_graph::DirectedGraph;

/// Writes counts, sizing policy, per-vertex degrees and the sorted edge list of `graph` to `out`.
pub fn write_report(
    graph: &DirectedGraph<String>,
    dump: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "vertices: {}", graph.vertex_size())?;
    writeln!(out, "edges: {}", graph.edge_size())?;
    let config = graph.config();
    writeln!(
        out,
        "capacity: {} (threshold {}, growth factor {})",
        graph.capacity(),
        config.threshold,
        config.growth_factor
    )?;

    let mut edges: Vec<_> = graph.edges().into_iter().collect();
    edges.sort();
    let total: i64 = edges.iter().map(|edge| i64::from(edge.weight())).sum();
    writeln!(out, "total weight: {total}")?;

    let mut vertices: Vec<_> = graph.vertices().into_iter().collect();
    vertices.sort();
    for vertex in &vertices {
        let out_degree = edges.iter().filter(|edge| edge.source() == vertex).count();
        let in_degree = edges
            .iter()
            .filter(|edge| edge.destination() == vertex)
            .count();
        writeln!(out, "  {vertex} (out {out_degree}, in {in_degree})")?;
    }

    for edge in &edges {
        writeln!(out, "  {edge}")?;
    }

    if dump {
        writeln!(out, "{graph:#?}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let mut graph = DirectedGraph::new();
        for v in ["b", "a", "c"] {
            graph.add_vertex(v.to_string());
        }
        graph.add_edge("b", "c", 2).unwrap();
        graph.add_edge("a", "b", 1).unwrap();

        let mut out = Vec::new();
        write_report(&graph, false, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "vertices: 3\n\
             edges: 2\n\
             capacity: 10 (threshold 0.5, growth factor 1.5)\n\
             total weight: 3\n  \
             a (out 1, in 0)\n  \
             b (out 1, in 1)\n  \
             c (out 0, in 1)\n  \
             a -> b (1)\n  \
             b -> c (2)\n"
        );
    }

    #[test]
    fn test_report_dump() {
        let graph = DirectedGraph::<String>::with_capacity(1);
        let mut out = Vec::new();
        write_report(&graph, true, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("free_indices"), "{out}");
    }
}
