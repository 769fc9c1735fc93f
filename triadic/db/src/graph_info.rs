//! Printable summary of a graph.
//!
//! # Examples
//! ```rust
//! use triadic_core::{Graph, GraphKind};
//! use triadic_db::graph_info::GraphInfo;
//!
//! let g = Graph::from_edges(GraphKind::Undirected, vec![(1u64, 2), (2, 3), (3, 1)])
//!     .with_name("triangle");
//! let info = GraphInfo::of(&g);
//!
//! assert_eq!(info.average_clustering, 1.0);
//! assert_eq!(info.average_shortest_path_length, Some(1.0));
//! println!("{info}");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use rayon::prelude::*;
use triadic_core::{Direction, Graph};

use crate::algorithms::connected_components::weakly_connected_components;
use crate::algorithms::local_clustering_coefficient::average_clustering;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphInfo {
    pub name: String,
    pub directed: bool,
    pub nodes: usize,
    pub edges: usize,
    pub average_clustering: f64,
    pub components: usize,
    /// Only computed for connected undirected graphs.
    pub average_shortest_path_length: Option<f64>,
}

impl GraphInfo {
    pub fn of<V: Clone + Eq + Hash + Sync>(g: &Graph<V>) -> Self {
        let components = weakly_connected_components(g).len();
        let average_shortest_path_length = if !g.is_directed() && components == 1 {
            Some(average_shortest_path_length(g))
        } else {
            None
        };

        GraphInfo {
            name: g.name().unwrap_or("unnamed").to_string(),
            directed: g.is_directed(),
            nodes: g.len(),
            edges: g.edges_len(),
            average_clustering: average_clustering(g),
            components,
            average_shortest_path_length,
        }
    }
}

fn bfs_distance_sum<V: Clone + Eq + Hash>(g: &Graph<V>, start: u32) -> u64 {
    let mut dist = vec![u64::MAX; g.len()];
    let mut queue = VecDeque::from([start]);
    dist[start as usize] = 0;
    let mut total = 0;

    while let Some(v) = queue.pop_front() {
        let d = dist[v as usize];
        total += d;
        for nb in g.neighbours(v, Direction::BOTH).iter() {
            if dist[nb as usize] == u64::MAX {
                dist[nb as usize] = d + 1;
                queue.push_back(nb);
            }
        }
    }
    total
}

/// Mean hop distance over all ordered pairs of distinct nodes of a connected graph.
pub fn average_shortest_path_length<V: Clone + Eq + Hash + Sync>(g: &Graph<V>) -> f64 {
    let n = g.len() as u64;
    if n < 2 {
        return 0.0;
    }
    let total: u64 = (0..n as u32)
        .into_par_iter()
        .map(|v| bfs_distance_sum(g, v))
        .sum();
    total as f64 / (n * (n - 1)) as f64
}

fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for GraphInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}. Directed: {}", self.name, self.directed)?;
        writeln!(f, "Number of nodes: {}", with_thousands(self.nodes))?;
        writeln!(f, "Number of edges: {}", with_thousands(self.edges))?;
        writeln!(f, "Average clustering: {}", self.average_clustering)?;
        match self.average_shortest_path_length {
            Some(len) => write!(f, "Average shortest path length: {len}"),
            None if self.components == 1 => write!(f, "Graph is connected"),
            None => write!(f, "Graph is not connected ({} components)", self.components),
        }
    }
}
