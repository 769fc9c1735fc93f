use std::hash::Hash;

use itertools::Itertools;
use triadic_core::{Direction, Graph};

/// Triangles through the node at `idx`, in the underlying undirected graph.
pub fn triangles_through<V: Clone + Eq + Hash>(g: &Graph<V>, idx: u32) -> u64 {
    let nbrs = g.neighbours(idx, Direction::BOTH);
    if nbrs.len() < 2 {
        return 0;
    }
    nbrs.iter()
        .map(|nb| g.neighbours(nb, Direction::BOTH).intersection_len(nbrs))
        .sum::<u64>()
        / 2
}

/// Number of pairs of neighbours of `v` which are themselves connected. Directed graphs are
/// treated as undirected. `None` when `v` is not in the graph.
pub fn local_triangle_count<V: Clone + Eq + Hash>(g: &Graph<V>, v: &V) -> Option<u64> {
    g.node_index(v).map(|idx| triangles_through(g, idx))
}

/// Same count by testing every pair of neighbours, kept as the reference.
pub fn local_triangle_count_pairwise<V: Clone + Eq + Hash>(g: &Graph<V>, v: &V) -> Option<u64> {
    let idx = g.node_index(v)?;
    let count = g
        .neighbours(idx, Direction::BOTH)
        .iter()
        .combinations(2)
        .filter(|nb| g.has_edge_idx(nb[0], nb[1]) || g.has_edge_idx(nb[1], nb[0]))
        .count();
    Some(count as u64)
}

#[cfg(test)]
mod triangle_count_tests {
    use super::*;
    use crate::graphgen::random::random_graph;
    use triadic_core::GraphKind;

    #[test]
    fn counts_triangles_local() {
        let g = Graph::from_edges(
            GraphKind::Directed,
            vec![(1u64, 2), (1, 3), (2, 1), (3, 2)],
        );

        let actual = (1..=3)
            .map(|v| local_triangle_count(&g, &v).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(actual, vec![1, 1, 1]);
        assert_eq!(local_triangle_count(&g, &4), None);
    }

    #[test]
    fn low_degree_nodes_have_no_triangles() {
        let g = Graph::from_edges(GraphKind::Undirected, vec![(1u64, 2), (2, 3)]);
        assert_eq!(local_triangle_count(&g, &1), Some(0));
        assert_eq!(local_triangle_count(&g, &2), Some(0));
    }

    #[quickcheck]
    fn intersection_matches_pairwise(n: u8, seed: u64) -> bool {
        let g = random_graph((n % 40) as usize, 0.2, GraphKind::Directed, seed);
        let agree = g
            .node_ids()
            .all(|v| local_triangle_count(&g, v) == local_triangle_count_pairwise(&g, v));
        agree
    }
}
