//! Per-node triadic metrics.
//!
//! For every node the profile holds the undirected triad classes of all triples that contain
//! it, its local clustering coefficient, the number of closed triads (triangles through the
//! node) and the number of open triads (pairs of its neighbours that are not adjacent).
//! Directed graphs are profiled through their underlying undirected graph.
//!
//! [`triadic_profiles`] derives the class counts of a node `x` from degrees and triangle
//! counts. With `N` the neighbours of `x`, `M` the remaining nodes, `t` the triangles
//! through `x` and `E_NM`, `E_MM` the edges between and within those sets:
//!
//! | pair `{y, z}` | `300` | `102`              | `012`              | `003`              |
//! |---------------|-------|--------------------|--------------------|--------------------|
//! | both in `N`   | `t`   | `C(|N|, 2) - t`    |                    |                    |
//! | one each      |       | `E_NM`             | `|N||M| - E_NM`    |                    |
//! | both in `M`   |       |                    | `E_MM`             | `C(|M|, 2) - E_MM` |
//!
//! [`brute_force_triadic_profiles`] classifies every triple instead and is the reference.

use std::hash::Hash;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use triadic_core::triad::classify_undirected;
use triadic_core::utils::choose_2;
use triadic_core::{Direction, Graph, GraphResult, TriadClass};

use super::local_clustering_coefficient::clustering;
use super::local_triangle_count::triangles_through;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeTriadProfile<V> {
    pub node: V,
    pub clustering_coefficient: f64,
    pub closed_triads: u64,
    pub open_triads: u64,
    /// Counts of `003`, `012`, `102` and `300` over triples containing the node.
    pub triads: [u64; 4],
}

impl<V> NodeTriadProfile<V> {
    /// Count for an undirected class, 0 for the directed-only classes.
    pub fn triad_count(&self, class: TriadClass) -> u64 {
        TriadClass::UNDIRECTED
            .iter()
            .position(|c| *c == class)
            .map_or(0, |i| self.triads[i])
    }
}

fn profile_of<V: Clone + Eq + Hash>(
    g: &Graph<V>,
    idx: u32,
    node: &V,
    pairs: u64,
) -> NodeTriadProfile<V> {
    let n = g.len() as u64;
    let nbrs = g.neighbours(idx, Direction::BOTH);
    let d = nbrs.len();
    let m = n - 1 - d;
    let t = triangles_through(g, idx);

    let nbr_degrees: u64 = nbrs.iter().map(|nb| g.degree(nb, Direction::BOTH)).sum();
    let e_nm = nbr_degrees - d - 2 * t;
    let e_mm = pairs - d - t - e_nm;

    NodeTriadProfile {
        node: node.clone(),
        clustering_coefficient: clustering(t, d),
        closed_triads: t,
        open_triads: choose_2(d) - t,
        triads: [
            choose_2(m) - e_mm,
            d * m - e_nm + e_mm,
            choose_2(d) - t + e_nm,
            t,
        ],
    }
}

/// Profiles of all nodes in index order.
pub fn triadic_profiles<V: Clone + Eq + Hash + Send + Sync>(
    g: &Graph<V>,
) -> Vec<NodeTriadProfile<V>> {
    tracing::debug!(nodes = g.len(), "computing triadic profiles");
    let pairs = g.connected_pairs_len();
    (0..g.len() as u32)
        .into_par_iter()
        .filter_map(|idx| g.node_id(idx).map(|v| profile_of(g, idx, v, pairs)))
        .collect()
}

pub fn triadic_profile<V: Clone + Eq + Hash>(g: &Graph<V>, v: &V) -> Option<NodeTriadProfile<V>> {
    let idx = g.node_index(v)?;
    Some(profile_of(g, idx, v, g.connected_pairs_len()))
}

/// Classifies every triple and walks every two-hop path explicitly.
pub fn brute_force_triadic_profiles<V: Clone + Eq + Hash>(
    g: &Graph<V>,
) -> GraphResult<Vec<NodeTriadProfile<V>>> {
    let adjacent = |a: u32, b: u32| g.neighbours(a, Direction::BOTH).contains(b);
    let mut triads = vec![[0u64; 4]; g.len()];

    for t in (0..g.len() as u32).combinations(3) {
        let edges = [(t[0], t[1]), (t[0], t[2]), (t[1], t[2])]
            .iter()
            .filter(|(a, b)| adjacent(*a, *b))
            .count();
        let class = classify_undirected(edges)?;
        let slot = TriadClass::UNDIRECTED
            .iter()
            .position(|c| *c == class)
            .unwrap_or_default();
        for node in t {
            triads[node as usize][slot] += 1;
        }
    }

    let profiles = triads
        .into_iter()
        .zip(g.node_ids())
        .enumerate()
        .map(|(idx, (triads, node))| {
            let idx = idx as u32;
            let nbrs = g.neighbours(idx, Direction::BOTH);

            let mut closed = 0;
            for nb in nbrs.iter() {
                for second in g.neighbours(nb, Direction::BOTH).iter() {
                    if second != idx && nbrs.contains(second) {
                        closed += 1;
                    }
                }
            }
            let open = nbrs
                .iter()
                .combinations(2)
                .filter(|pair| !adjacent(pair[0], pair[1]))
                .count() as u64;

            NodeTriadProfile {
                node: node.clone(),
                clustering_coefficient: clustering(closed / 2, nbrs.len()),
                closed_triads: closed / 2,
                open_triads: open,
                triads,
            }
        })
        .collect();
    Ok(profiles)
}
