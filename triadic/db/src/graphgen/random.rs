use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triadic_core::{Graph, GraphKind};

/// Erdős–Rényi `G(n, p)`: every ordered (directed) or unordered (undirected) pair of the
/// nodes `0..n` is joined with probability `p`.
pub fn random_graph(n: usize, p: f64, kind: GraphKind, seed: u64) -> Graph<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(kind);
    for v in 0..n as u64 {
        graph.add_node(v);
    }
    for src in 0..n as u64 {
        for dst in 0..n as u64 {
            let candidate = match kind {
                GraphKind::Directed => src != dst,
                GraphKind::Undirected => src < dst,
            };
            if candidate && rng.gen_bool(p) {
                graph.add_edge(src, dst);
            }
        }
    }
    graph
}

#[cfg(test)]
mod random_test {
    use super::*;

    #[test]
    fn graph_size() {
        let graph = random_graph(10, 1.0, GraphKind::Directed, 1);
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.edges_len(), 90);

        let graph = random_graph(10, 1.0, GraphKind::Undirected, 1);
        assert_eq!(graph.edges_len(), 45);

        let graph = random_graph(10, 0.0, GraphKind::Undirected, 1);
        assert_eq!(graph.edges_len(), 0);
    }

    #[test]
    fn seeded_graphs_repeat() {
        let a = random_graph(50, 0.1, GraphKind::Directed, 42);
        let b = random_graph(50, 0.1, GraphKind::Directed, 42);
        let edges = |g: &Graph<u64>| {
            (0..50u64)
                .flat_map(|s| (0..50u64).map(move |d| (s, d)))
                .filter(|(s, d)| g.has_edge(s, d))
                .collect::<Vec<_>>()
        };
        assert_eq!(edges(&a), edges(&b));
    }
}
