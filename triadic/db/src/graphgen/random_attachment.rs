use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use triadic_core::Graph;

/// Grows the graph by `nodes_to_add` nodes, each linked to `edges_per_step` existing nodes
/// chosen uniformly at random. Seeds the graph with `edges_per_step` nodes when it is too
/// small to draw from.
pub fn random_attachment(
    graph: &mut Graph<u64>,
    nodes_to_add: usize,
    edges_per_step: usize,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids: Vec<u64> = graph.node_ids().copied().collect();
    let mut max_id = ids.iter().max().map_or(0, |id| id + 1);

    while ids.len() < edges_per_step {
        graph.add_node(max_id);
        ids.push(max_id);
        max_id += 1;
    }

    for _ in 0..nodes_to_add {
        let targets: Vec<u64> = ids
            .choose_multiple(&mut rng, edges_per_step)
            .copied()
            .collect();
        for target in targets {
            graph.add_edge(max_id, target);
        }
        ids.push(max_id);
        max_id += 1;
    }
}
