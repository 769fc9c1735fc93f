//! Local clustering coefficient - the fraction of a node's neighbour pairs that are
//! themselves connected.
//!
//! A high coefficient means the neighbourhood of a node is a tightly knit group, a low one
//! that its neighbours mostly do not know each other. Nodes with fewer than two neighbours
//! have a coefficient of 0. Directed graphs are treated as undirected.
//!
//! # Examples
//!
//! ```rust
//! use triadic_core::{Graph, GraphKind};
//! use triadic_db::algorithms::local_clustering_coefficient::local_clustering_coefficient;
//!
//! let g = Graph::from_edges(
//!     GraphKind::Undirected,
//!     vec![(1u64, 2), (1, 3), (2, 3), (1, 4), (4, 5)],
//! );
//!
//! assert_eq!(local_clustering_coefficient(&g, &1), Some(1.0 / 3.0));
//! assert_eq!(local_clustering_coefficient(&g, &2), Some(1.0));
//! assert_eq!(local_clustering_coefficient(&g, &5), Some(0.0));
//! ```

use std::hash::Hash;

use rayon::prelude::*;
use triadic_core::utils::choose_2;
use triadic_core::{Direction, Graph};

use super::local_triangle_count::triangles_through;

pub(crate) fn clustering(triangles: u64, degree: u64) -> f64 {
    if degree < 2 {
        0.0
    } else {
        triangles as f64 / choose_2(degree) as f64
    }
}

pub fn local_clustering_coefficient<V: Clone + Eq + Hash>(g: &Graph<V>, v: &V) -> Option<f64> {
    let idx = g.node_index(v)?;
    Some(clustering(
        triangles_through(g, idx),
        g.degree(idx, Direction::BOTH),
    ))
}

/// Mean local clustering coefficient over all nodes, 0 for an empty graph.
pub fn average_clustering<V: Clone + Eq + Hash + Sync>(g: &Graph<V>) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    let sum: f64 = (0..g.len() as u32)
        .into_par_iter()
        .map(|idx| clustering(triangles_through(g, idx), g.degree(idx, Direction::BOTH)))
        .sum();
    sum / g.len() as f64
}

#[cfg(test)]
mod clustering_coefficient_tests {
    use super::*;
    use triadic_core::GraphKind;

    #[test]
    fn clusters_of_triangles() {
        let g = Graph::from_edges(
            GraphKind::Directed,
            vec![(1u64, 2), (1, 3), (2, 1), (3, 2), (1, 4), (4, 5)],
        );

        let actual = (1..=5)
            .map(|v| local_clustering_coefficient(&g, &v).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(actual, vec![1.0 / 3.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(local_clustering_coefficient(&g, &6), None);
    }

    #[test]
    fn average_over_nodes() {
        let g = Graph::from_edges(
            GraphKind::Undirected,
            vec![(1u64, 2), (2, 3), (3, 1), (3, 4)],
        );
        // 1, 1, 1/3, 0
        assert!((average_clustering(&g) - (7.0 / 3.0) / 4.0).abs() < 1e-12);
        assert_eq!(average_clustering(&Graph::<u64>::undirected()), 0.0);
    }
}
