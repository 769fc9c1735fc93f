//! In-memory simple graph.
//!
//! Nodes are opaque hashable identifiers mapped to dense `u32` indices in insertion order.
//! Adjacency is kept as one [`RoaringBitmap`] per node and direction, plus the union of both
//! directions so algorithms that look at the underlying undirected graph do not have to
//! rebuild it. Repeated edges collapse and self-loops are dropped, so every triple of nodes
//! induces one of the 64 configurations classified in [`crate::triad`].

use crate::triad::GraphKind;
use crate::Direction;
use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Graph<V = u64> {
    kind: GraphKind,
    name: Option<String>,
    ids: Vec<V>,
    index: FxHashMap<V, u32>,
    out_adj: Vec<RoaringBitmap>,
    in_adj: Vec<RoaringBitmap>,
    nbrs: Vec<RoaringBitmap>,
    n_edges: usize,
}

impl<V: Clone + Eq + Hash> Graph<V> {
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            name: None,
            ids: vec![],
            index: FxHashMap::default(),
            out_adj: vec![],
            in_adj: vec![],
            nbrs: vec![],
            n_edges: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(kind: GraphKind, edges: I) -> Self {
        let mut g = Self::new(kind);
        for (src, dst) in edges {
            g.add_edge(src, dst);
        }
        g
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Adds a node if it is not present yet and returns its index.
    ///
    /// # Panics
    /// If the graph already holds `u32::MAX` nodes.
    pub fn add_node(&mut self, v: V) -> u32 {
        if let Some(idx) = self.index.get(&v) {
            return *idx;
        }
        assert!(self.ids.len() < u32::MAX as usize, "graph is full");
        let idx = self.ids.len() as u32;
        self.ids.push(v.clone());
        self.index.insert(v, idx);
        self.out_adj.push(RoaringBitmap::new());
        self.in_adj.push(RoaringBitmap::new());
        self.nbrs.push(RoaringBitmap::new());
        idx
    }

    /// Adds an edge, creating missing endpoints. Returns `false` for repeated edges and
    /// self-loops, which leave the edge set unchanged.
    pub fn add_edge(&mut self, src: V, dst: V) -> bool {
        let s = self.add_node(src);
        let d = self.add_node(dst);
        if s == d {
            tracing::trace!(node = s, "ignoring self-loop");
            return false;
        }

        let added = self.out_adj[s as usize].insert(d);
        if added {
            self.in_adj[d as usize].insert(s);
            self.nbrs[s as usize].insert(d);
            self.nbrs[d as usize].insert(s);
            if !self.is_directed() {
                self.out_adj[d as usize].insert(s);
                self.in_adj[s as usize].insert(d);
            }
            self.n_edges += 1;
        }
        added
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of edges, counting each direction of a mutual pair in a directed graph.
    pub fn edges_len(&self) -> usize {
        self.n_edges
    }

    /// Number of node pairs joined by at least one edge.
    pub fn connected_pairs_len(&self) -> u64 {
        self.nbrs.iter().map(|n| n.len()).sum::<u64>() / 2
    }

    pub fn has_node(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn node_index(&self, v: &V) -> Option<u32> {
        self.index.get(v).copied()
    }

    pub fn node_id(&self, idx: u32) -> Option<&V> {
        self.ids.get(idx as usize)
    }

    /// Node identifiers in index order.
    pub fn node_ids(&self) -> impl Iterator<Item = &V> + '_ {
        self.ids.iter()
    }

    pub fn has_edge(&self, src: &V, dst: &V) -> bool {
        match (self.node_index(src), self.node_index(dst)) {
            (Some(s), Some(d)) => self.has_edge_idx(s, d),
            _ => false,
        }
    }

    #[inline]
    pub fn has_edge_idx(&self, src: u32, dst: u32) -> bool {
        self.out_adj
            .get(src as usize)
            .map_or(false, |out| out.contains(dst))
    }

    /// Neighbour set of a node in the given direction. `BOTH` is the underlying
    /// undirected neighbourhood.
    #[inline]
    pub fn neighbours(&self, idx: u32, d: Direction) -> &RoaringBitmap {
        match d {
            Direction::OUT => &self.out_adj[idx as usize],
            Direction::IN => &self.in_adj[idx as usize],
            Direction::BOTH => &self.nbrs[idx as usize],
        }
    }

    #[inline]
    pub fn degree(&self, idx: u32, d: Direction) -> u64 {
        self.neighbours(idx, d).len()
    }

    /// Subgraph induced by the given node indices, keeping their relative order.
    pub fn subgraph(&self, nodes: &RoaringBitmap) -> Graph<V> {
        let mut g = Graph::new(self.kind);
        g.name = self.name.clone();
        for idx in nodes.iter() {
            if let Some(v) = self.node_id(idx) {
                g.add_node(v.clone());
            }
        }
        for src in nodes.iter().filter(|idx| (*idx as usize) < self.len()) {
            for dst in (&self.out_adj[src as usize] & nodes).iter() {
                g.add_edge(self.ids[src as usize].clone(), self.ids[dst as usize].clone());
            }
        }
        g
    }

    /// The underlying undirected graph.
    pub fn to_undirected(&self) -> Graph<V> {
        let mut g = Graph::new(GraphKind::Undirected);
        g.name = self.name.clone();
        for v in &self.ids {
            g.add_node(v.clone());
        }
        for (src, out) in self.out_adj.iter().enumerate() {
            for dst in out.iter() {
                g.add_edge(self.ids[src].clone(), self.ids[dst as usize].clone());
            }
        }
        g
    }
}
