//! Global triangle count: the number of triangles in a graph.
//!
//! A triangle is a set of three nodes that are mutually adjacent. Edge directions are
//! ignored. Every node's neighbourhood is intersected with its neighbours' neighbourhoods,
//! so this is expensive on graphs with high-degree hubs.
//!
//! # Examples
//! ```rust
//! use triadic_core::{Graph, GraphKind};
//! use triadic_db::algorithms::global_triangle_count::global_triangle_count;
//!
//! let g = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2), (1, 3), (2, 1), (3, 2)]);
//! assert_eq!(global_triangle_count(&g), 1);
//! ```

use std::hash::Hash;

use rayon::prelude::*;
use triadic_core::Graph;

use super::local_triangle_count::triangles_through;

pub fn global_triangle_count<V: Clone + Eq + Hash + Sync>(g: &Graph<V>) -> u64 {
    let count: u64 = (0..g.len() as u32)
        .into_par_iter()
        .map(|idx| triangles_through(g, idx))
        .sum();
    count / 3
}

#[cfg(test)]
mod triangle_count_tests {
    use super::*;
    use triadic_core::GraphKind;

    #[test]
    fn counts_triangles_global_again() {
        let edges = vec![
            (1u64, 2),
            (1, 3),
            (1, 4),
            (3, 1),
            (3, 4),
            (3, 5),
            (4, 5),
            (5, 6),
            (5, 8),
            (7, 5),
            (8, 5),
            (1, 9),
            (9, 1),
            (6, 3),
            (4, 8),
            (8, 3),
            (5, 10),
            (10, 5),
            (10, 8),
            (1, 11),
            (11, 1),
            (9, 11),
            (11, 9),
        ];
        let g = Graph::from_edges(GraphKind::Directed, edges);

        assert_eq!(global_triangle_count(&g), 8);
    }
}
