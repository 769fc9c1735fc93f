//! Weakly connected components and related clean-up helpers.

use std::collections::VecDeque;
use std::hash::Hash;

use roaring::RoaringBitmap;
use triadic_core::{Direction, Graph};

/// Node index sets of the weakly connected components, largest first.
pub fn weakly_connected_components<V: Clone + Eq + Hash>(g: &Graph<V>) -> Vec<RoaringBitmap> {
    let mut seen = RoaringBitmap::new();
    let mut components = vec![];

    for start in 0..g.len() as u32 {
        if seen.contains(start) {
            continue;
        }
        let mut component = RoaringBitmap::new();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);

        while let Some(v) = queue.pop_front() {
            component.insert(v);
            for nb in g.neighbours(v, Direction::BOTH).iter() {
                if seen.insert(nb) {
                    queue.push_back(nb);
                }
            }
        }
        components.push(component);
    }

    // stable, so equal sizes keep discovery order
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components
}

/// Components as induced subgraphs, largest first, named `Component i of <name>`.
pub fn connected_components<V: Clone + Eq + Hash>(g: &Graph<V>) -> Vec<Graph<V>> {
    let parent = g.name().unwrap_or("graph").to_string();
    weakly_connected_components(g)
        .iter()
        .enumerate()
        .map(|(i, nodes)| {
            g.subgraph(nodes)
                .with_name(format!("Component {} of {}", i + 1, parent))
        })
        .collect()
}

pub fn is_connected<V: Clone + Eq + Hash>(g: &Graph<V>) -> bool {
    !g.is_empty() && weakly_connected_components(g).len() == 1
}

pub fn largest_connected_component<V: Clone + Eq + Hash>(g: &Graph<V>) -> Option<Graph<V>> {
    weakly_connected_components(g)
        .first()
        .map(|nodes| g.subgraph(nodes))
}

/// Copy of the graph without degree-0 nodes.
pub fn remove_isolated_nodes<V: Clone + Eq + Hash>(g: &Graph<V>) -> Graph<V> {
    let keep: RoaringBitmap = (0..g.len() as u32)
        .filter(|idx| g.degree(*idx, Direction::BOTH) > 0)
        .collect();
    g.subgraph(&keep)
}
