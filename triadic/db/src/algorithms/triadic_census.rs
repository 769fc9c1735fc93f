//! Triadic census: counts every triad of a graph by isomorphism class.
//!
//! [`triadic_census`] implements the sub-quadratic algorithm of Batagelj and Mrvar
//! ("A subquadratic triad census algorithm for large sparse networks with small maximum
//! degree", 2001). Only triples with at least one edge are visited: for every connected
//! pair `(v, u)` with `v < u` the third node ranges over the union of both neighbourhoods,
//! each triple is claimed by exactly one of its connected pairs, triples where the third
//! node touches neither endpoint are counted arithmetically, and `003` is what remains of
//! `C(n, 3)`.
//!
//! [`brute_force_triadic_census`] and [`par_brute_force_triadic_census`] classify every one
//! of the `C(n, 3)` triples. They are the reference the fast path is tested against and are
//! only practical for small graphs.
//!
//! # Examples
//! ```rust
//! use triadic_core::{Graph, GraphKind, TriadClass};
//! use triadic_db::algorithms::triadic_census::triadic_census;
//!
//! let g = Graph::from_edges(
//!     GraphKind::Directed,
//!     vec![(1u64, 2), (2, 3), (3, 1), (3, 4), (4, 1), (4, 2)],
//! );
//! let census = triadic_census(&g).unwrap();
//!
//! assert_eq!(census.get(TriadClass::T030T), 2);
//! assert_eq!(census.get(TriadClass::T030C), 2);
//! assert_eq!(census.total(), 4);
//! ```

use std::hash::Hash;

use itertools::Itertools;
use rayon::prelude::*;
use triadic_core::triad::{self, TriadClass};
use triadic_core::utils::choose_3;
use triadic_core::{Census, Direction, Graph, GraphResult};

use super::triad_classifier::{classify_indices, tricode};

pub fn triadic_census<V: Clone + Eq + Hash + Sync>(g: &Graph<V>) -> GraphResult<Census> {
    let kind = g.kind();
    let n = g.len() as u64;
    tracing::debug!(nodes = n, edges = g.edges_len(), ?kind, "computing triadic census");

    let mut census = (0..g.len() as u32)
        .into_par_iter()
        .map(|v| -> GraphResult<Census> {
            let mut local = Census::new(kind);
            let vnbrs = g.neighbours(v, Direction::BOTH);

            for u in vnbrs.iter().filter(|u| *u > v) {
                let mut shared = vnbrs | g.neighbours(u, Direction::BOTH);
                shared.remove(u);
                shared.remove(v);

                for w in shared.iter() {
                    if u < w || (v < w && w < u && !vnbrs.contains(w)) {
                        local.increment(triad::classify(kind, tricode(g, v, u, w))?);
                    }
                }

                // the third node touches neither v nor u
                let dyad = triad::classify(
                    kind,
                    triad::triad_code(
                        g.has_edge_idx(v, u),
                        g.has_edge_idx(u, v),
                        false,
                        false,
                        false,
                        false,
                    ),
                )?;
                local.record(dyad, n - shared.len() - 2);
            }
            Ok(local)
        })
        .try_reduce(|| Census::new(kind), |a, b| Ok(a + b))?;

    let connected = census.total();
    census.record(TriadClass::T003, choose_3(n) - connected);
    Ok(census)
}

pub fn brute_force_triadic_census<V: Clone + Eq + Hash>(g: &Graph<V>) -> GraphResult<Census> {
    tracing::debug!(nodes = g.len(), "enumerating all triples");
    (0..g.len() as u32)
        .combinations(3)
        .try_fold(Census::new(g.kind()), |mut census, t| -> GraphResult<Census> {
            census.increment(classify_indices(g, t[0], t[1], t[2])?);
            Ok(census)
        })
}

/// Brute force enumeration with the triple space partitioned by its lowest node.
pub fn par_brute_force_triadic_census<V: Clone + Eq + Hash + Sync>(
    g: &Graph<V>,
) -> GraphResult<Census> {
    let kind = g.kind();
    let n = g.len() as u32;
    (0..n)
        .into_par_iter()
        .map(|a| -> GraphResult<Census> {
            let mut local = Census::new(kind);
            for b in a + 1..n {
                for c in b + 1..n {
                    local.increment(classify_indices(g, a, b, c)?);
                }
            }
            Ok(local)
        })
        .try_reduce(|| Census::new(kind), |x, y| Ok(x + y))
}

#[cfg(test)]
mod triadic_census_tests {
    use super::*;
    use crate::graphgen::random::random_graph;
    use pretty_assertions::assert_eq;
    use triadic_core::GraphKind;

    fn counts(census: &Census) -> Vec<(&'static str, u64)> {
        census
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(c, n)| (c.label(), n))
            .collect()
    }

    #[test]
    fn two_cycles_and_two_transitive_triads() {
        let g = Graph::from_edges(
            GraphKind::Directed,
            vec![(1u64, 2), (2, 3), (3, 1), (3, 4), (4, 1), (4, 2)],
        );
        let census = triadic_census(&g).unwrap();
        assert_eq!(counts(&census), vec![("030T", 2), ("030C", 2)]);
    }

    #[test]
    fn single_triples() {
        let path = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2), (2, 3)]);
        assert_eq!(counts(&triadic_census(&path).unwrap()), vec![("021C", 1)]);

        let mut full = Graph::directed();
        for (src, dst) in (1..=3u64).permutations(2).map(|p| (p[0], p[1])) {
            full.add_edge(src, dst);
        }
        assert_eq!(counts(&triadic_census(&full).unwrap()), vec![("300", 1)]);

        let mut empty: Graph<u64> = Graph::directed();
        for v in 1..=3 {
            empty.add_node(v);
        }
        assert_eq!(counts(&triadic_census(&empty).unwrap()), vec![("003", 1)]);
    }

    #[test]
    fn undirected_path() {
        let g = Graph::from_edges(
            GraphKind::Undirected,
            vec![("a", "b"), ("b", "c"), ("c", "d")],
        );
        let census = triadic_census(&g).unwrap();
        assert_eq!(census.to_map().len(), 4);
        assert_eq!(
            counts(&census),
            vec![("012", 2), ("102", 2)]
        );
    }

    #[test]
    fn fewer_than_three_nodes() {
        let g = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2)]);
        assert_eq!(triadic_census(&g).unwrap().total(), 0);
        assert_eq!(brute_force_triadic_census(&g).unwrap().total(), 0);

        let empty: Graph<u64> = Graph::undirected();
        assert_eq!(triadic_census(&empty).unwrap().total(), 0);
    }

    #[test]
    fn isolated_nodes_only_add_empty_triads() {
        let mut g = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2), (2, 1)]);
        g.add_node(3);
        g.add_node(4);
        let census = triadic_census(&g).unwrap();
        assert_eq!(counts(&census), vec![("003", 2), ("102", 2)]);
    }

    #[test]
    fn census_is_idempotent() {
        let g = random_graph(40, 0.1, GraphKind::Directed, 7);
        assert_eq!(triadic_census(&g).unwrap(), triadic_census(&g).unwrap());
    }

    #[test]
    fn parallel_brute_force_matches_sequential() {
        let g = random_graph(25, 0.2, GraphKind::Directed, 3);
        assert_eq!(
            par_brute_force_triadic_census(&g).unwrap(),
            brute_force_triadic_census(&g).unwrap()
        );
    }

    #[quickcheck]
    fn fast_census_matches_brute_force(edges: Vec<(u8, u8)>, directed: bool) -> bool {
        let kind = if directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        // keep the cubic reference cheap
        let g = Graph::from_edges(kind, edges.into_iter().map(|(s, d)| (s % 24, d % 24)));
        triadic_census(&g) == brute_force_triadic_census(&g)
    }

    #[quickcheck]
    fn census_totals_n_choose_3(n: u8, seed: u64) -> bool {
        let n = (n % 60) as usize;
        let g = random_graph(n, 0.15, GraphKind::Directed, seed);
        triadic_census(&g).unwrap().total() == choose_3(n as u64)
    }

    fn resources() -> std::path::PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "resources/test"].iter().collect()
    }

    #[test]
    fn karate_club_census() {
        let g = crate::loaders::csv::load_local_dataset(resources(), "karate").unwrap();
        let census = triadic_census(&g).unwrap();
        assert_eq!(
            counts(&census),
            vec![("003", 3971), ("012", 1575), ("102", 393), ("300", 45)]
        );
    }

    #[test]
    fn directed_dataset_census() {
        let g = crate::loaders::csv::load_local_dataset(resources(), "quotes-directed").unwrap();
        let census = triadic_census(&g).unwrap();
        assert_eq!(
            counts(&census),
            vec![
                ("003", 1687),
                ("012", 1555),
                ("102", 131),
                ("021D", 160),
                ("021U", 128),
                ("021C", 242),
                ("111D", 36),
                ("111U", 44),
                ("030T", 47),
                ("030C", 18),
                ("201", 1),
                ("120D", 1),
                ("120U", 4),
                ("120C", 6),
            ]
        );
        assert_eq!(census, brute_force_triadic_census(&g).unwrap());
    }
}
