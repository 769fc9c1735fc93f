//! Classifies a single triple of nodes into its triad class.
//!
//! # Examples
//! ```rust
//! use triadic_core::{Graph, GraphKind, TriadClass};
//! use triadic_db::algorithms::triad_classifier::classify_triad;
//!
//! let g = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2), (2, 3), (3, 1)]);
//! assert_eq!(classify_triad(&g, &[1, 2, 3]), Ok(TriadClass::T030C));
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use triadic_core::triad::{self, TriadCode};
use triadic_core::{Graph, GraphError, GraphResult, TriadClass};

/// Edge configuration of the ordered triple `(a, b, c)`.
#[inline]
pub fn tricode<V: Clone + Eq + Hash>(g: &Graph<V>, a: u32, b: u32, c: u32) -> TriadCode {
    triad::triad_code(
        g.has_edge_idx(a, b),
        g.has_edge_idx(b, a),
        g.has_edge_idx(a, c),
        g.has_edge_idx(c, a),
        g.has_edge_idx(b, c),
        g.has_edge_idx(c, b),
    )
}

#[inline]
pub(crate) fn classify_indices<V: Clone + Eq + Hash>(
    g: &Graph<V>,
    a: u32,
    b: u32,
    c: u32,
) -> GraphResult<TriadClass> {
    triad::classify(g.kind(), tricode(g, a, b, c))
}

/// Classifies the subgraph induced by exactly three pairwise distinct nodes.
pub fn classify_triad<V: Clone + Eq + Hash + Debug>(
    g: &Graph<V>,
    nodes: &[V],
) -> GraphResult<TriadClass> {
    if nodes.len() != 3 {
        return Err(GraphError::InvalidTriple(format!(
            "expected 3 nodes, got {}",
            nodes.len()
        )));
    }
    if !nodes.iter().all_unique() {
        return Err(GraphError::InvalidTriple(format!(
            "nodes {nodes:?} are not pairwise distinct"
        )));
    }

    let idx: Vec<u32> = nodes
        .iter()
        .map(|v| {
            g.node_index(v)
                .ok_or_else(|| GraphError::NodeNotFound(format!("{v:?}")))
        })
        .collect::<GraphResult<_>>()?;

    classify_indices(g, idx[0], idx[1], idx[2])
}

#[cfg(test)]
mod triad_classifier_tests {
    use super::*;
    use triadic_core::GraphKind;

    #[test]
    fn directed_examples() {
        let mut g = Graph::directed();
        for v in 1..=3u64 {
            g.add_node(v);
        }
        assert_eq!(classify_triad(&g, &[1, 2, 3]), Ok(TriadClass::T003));

        g.add_edge(1, 2);
        g.add_edge(2, 3);
        // class names follow the Holland-Leinhardt triad table, where a directed path is 021C
        assert_eq!(classify_triad(&g, &[1, 2, 3]), Ok(TriadClass::T021C));
        assert_eq!(classify_triad(&g, &[3, 1, 2]), Ok(TriadClass::T021C));

        for (src, dst) in [(2, 1), (3, 2), (1, 3), (3, 1)] {
            g.add_edge(src, dst);
        }
        assert_eq!(classify_triad(&g, &[2, 3, 1]), Ok(TriadClass::T300));
    }

    #[test]
    fn undirected_examples() {
        let g = Graph::from_edges(GraphKind::Undirected, vec![("a", "b"), ("b", "c"), ("c", "d")]);
        assert_eq!(classify_triad(&g, &["a", "b", "c"]), Ok(TriadClass::T102));
        assert_eq!(classify_triad(&g, &["a", "b", "d"]), Ok(TriadClass::T012));
        assert_eq!(classify_triad(&g, &["a", "c", "d"]), Ok(TriadClass::T012));

        let triangle = Graph::from_edges(GraphKind::Undirected, vec![(1u64, 2), (2, 3), (3, 1)]);
        assert_eq!(classify_triad(&triangle, &[1, 2, 3]), Ok(TriadClass::T300));
    }

    #[test]
    fn rejects_bad_triples() {
        let g = Graph::from_edges(GraphKind::Directed, vec![(1u64, 2), (2, 3)]);
        assert!(matches!(
            classify_triad(&g, &[1, 2]),
            Err(GraphError::InvalidTriple(_))
        ));
        assert!(matches!(
            classify_triad(&g, &[1, 2, 3, 4]),
            Err(GraphError::InvalidTriple(_))
        ));
        assert!(matches!(
            classify_triad(&g, &[1, 2, 1]),
            Err(GraphError::InvalidTriple(_))
        ));
        assert_eq!(
            classify_triad(&g, &[1, 2, 9]),
            Err(GraphError::NodeNotFound("9".to_string()))
        );
    }

    #[quickcheck]
    fn all_configurations_classify(bits: u8) -> bool {
        let code = bits % 64;
        let mut g = Graph::directed();
        for v in 0..3u64 {
            g.add_node(v);
        }
        let pairs = [(0, 1), (1, 0), (0, 2), (2, 0), (1, 2), (2, 1)];
        for (bit, (src, dst)) in pairs.iter().enumerate() {
            if code & (1 << bit) != 0 {
                g.add_edge(*src, *dst);
            }
        }
        tricode(&g, 0, 1, 2) == code && classify_triad(&g, &[0, 1, 2]).is_ok()
    }
}
