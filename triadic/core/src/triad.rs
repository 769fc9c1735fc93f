//! Triad isomorphism classes.
//!
//! A triad is an unordered set of three distinct nodes together with the edges among them.
//! Directed triads fall into the 16 classes of the Holland-Leinhardt (MAN) census, named by
//! the number of Mutual, Asymmetric and Null dyads they contain plus an optional letter
//! (`D`own, `U`p, `C`yclic, `T`ransitive). Undirected triads fall into four classes decided
//! by their edge count, labelled `003`, `012`, `102` and `300`.
//!
//! The edge configuration of an ordered triple `(a, b, c)` is packed into a six bit
//! [`TriadCode`]:
//!
//! | bit | edge   |
//! |-----|--------|
//! | 0   | a -> b |
//! | 1   | b -> a |
//! | 2   | a -> c |
//! | 3   | c -> a |
//! | 4   | b -> c |
//! | 5   | c -> b |
//!
//! Every class carries its canonical edge set over the abstract positions 1, 2 and 3.
//! A code is classified by comparing it to each canonical pattern under all six
//! relabellings of the positions, so the result never depends on the order in which
//! the triple was handed over.

use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub type TriadCode = u8;

/// Number of distinct edge configurations over three nodes.
pub const TRIAD_CODES: usize = 64;

const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    /// The classes a census over this kind of graph reports, in census order.
    pub fn classes(&self) -> &'static [TriadClass] {
        match self {
            GraphKind::Directed => &TriadClass::ALL,
            GraphKind::Undirected => &TriadClass::UNDIRECTED,
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TriadClass {
    #[serde(rename = "003")]
    T003,
    #[serde(rename = "012")]
    T012,
    #[serde(rename = "102")]
    T102,
    #[serde(rename = "021D")]
    T021D,
    #[serde(rename = "021U")]
    T021U,
    #[serde(rename = "021C")]
    T021C,
    #[serde(rename = "111D")]
    T111D,
    #[serde(rename = "111U")]
    T111U,
    #[serde(rename = "030T")]
    T030T,
    #[serde(rename = "030C")]
    T030C,
    #[serde(rename = "201")]
    T201,
    #[serde(rename = "120D")]
    T120D,
    #[serde(rename = "120U")]
    T120U,
    #[serde(rename = "120C")]
    T120C,
    #[serde(rename = "210")]
    T210,
    #[serde(rename = "300")]
    T300,
}

impl TriadClass {
    pub const ALL: [TriadClass; 16] = [
        TriadClass::T003,
        TriadClass::T012,
        TriadClass::T102,
        TriadClass::T021D,
        TriadClass::T021U,
        TriadClass::T021C,
        TriadClass::T111D,
        TriadClass::T111U,
        TriadClass::T030T,
        TriadClass::T030C,
        TriadClass::T201,
        TriadClass::T120D,
        TriadClass::T120U,
        TriadClass::T120C,
        TriadClass::T210,
        TriadClass::T300,
    ];

    /// Classes without a triangle or a pair of mutual dyads, dropped when a report ignores
    /// open triads. `201` is kept.
    pub const OPEN: [TriadClass; 8] = [
        TriadClass::T003,
        TriadClass::T012,
        TriadClass::T102,
        TriadClass::T021D,
        TriadClass::T021U,
        TriadClass::T021C,
        TriadClass::T111D,
        TriadClass::T111U,
    ];

    /// Classes of an undirected census, indexed by edge count.
    pub const UNDIRECTED: [TriadClass; 4] = [
        TriadClass::T003,
        TriadClass::T012,
        TriadClass::T102,
        TriadClass::T300,
    ];

    /// Position of the class in [`TriadClass::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            TriadClass::T003 => "003",
            TriadClass::T012 => "012",
            TriadClass::T102 => "102",
            TriadClass::T021D => "021D",
            TriadClass::T021U => "021U",
            TriadClass::T021C => "021C",
            TriadClass::T111D => "111D",
            TriadClass::T111U => "111U",
            TriadClass::T030T => "030T",
            TriadClass::T030C => "030C",
            TriadClass::T201 => "201",
            TriadClass::T120D => "120D",
            TriadClass::T120U => "120U",
            TriadClass::T120C => "120C",
            TriadClass::T210 => "210",
            TriadClass::T300 => "300",
        }
    }

    pub fn from_label(label: &str) -> Option<TriadClass> {
        TriadClass::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn description(&self, kind: GraphKind) -> &'static str {
        match (kind, self) {
            (GraphKind::Undirected, TriadClass::T003) => "No edges",
            (GraphKind::Undirected, TriadClass::T012) => "Single edge",
            (GraphKind::Undirected, TriadClass::T102) => "Two edges forming a \"V\"",
            (GraphKind::Undirected, TriadClass::T300) => "Full triad",
            (_, TriadClass::T003) => "No edges",
            (_, TriadClass::T012) => "Single directed edge",
            (_, TriadClass::T102) => "Single mutual edge",
            (_, TriadClass::T021D) => "Out-star",
            (_, TriadClass::T021U) => "In-star",
            (_, TriadClass::T021C) => "Directed path",
            (_, TriadClass::T111D) => "Mutual edge with incoming edge",
            (_, TriadClass::T111U) => "Mutual edge with outgoing edge",
            (_, TriadClass::T030T) => "Transitive triad",
            (_, TriadClass::T030C) => "Cyclic triad",
            (_, TriadClass::T201) => "Two mutual edges",
            (_, TriadClass::T120D) => "Out-star with mutual edge",
            (_, TriadClass::T120U) => "In-star with mutual edge",
            (_, TriadClass::T120C) => "Directed path with mutual edge",
            (_, TriadClass::T210) => "Two mutual edges and one directed edge",
            (_, TriadClass::T300) => "Full triad",
        }
    }

    /// Defining edges over the abstract positions 1, 2 and 3.
    pub fn canonical_edges(&self) -> &'static [(u8, u8)] {
        match self {
            TriadClass::T003 => &[],
            TriadClass::T012 => &[(1, 2)],
            TriadClass::T102 => &[(1, 2), (2, 1)],
            TriadClass::T021D => &[(2, 1), (2, 3)],
            TriadClass::T021U => &[(1, 2), (3, 2)],
            TriadClass::T021C => &[(1, 2), (2, 3)],
            TriadClass::T111D => &[(1, 2), (2, 1), (3, 2)],
            TriadClass::T111U => &[(1, 2), (2, 1), (2, 3)],
            TriadClass::T030T => &[(1, 2), (3, 2), (1, 3)],
            TriadClass::T030C => &[(2, 1), (3, 2), (1, 3)],
            TriadClass::T201 => &[(1, 2), (2, 1), (2, 3), (3, 2)],
            TriadClass::T120D => &[(2, 1), (2, 3), (1, 3), (3, 1)],
            TriadClass::T120U => &[(1, 2), (3, 2), (1, 3), (3, 1)],
            TriadClass::T120C => &[(1, 2), (2, 3), (1, 3), (3, 1)],
            TriadClass::T210 => &[(1, 2), (2, 3), (3, 2), (1, 3), (3, 1)],
            TriadClass::T300 => &[(1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2)],
        }
    }

    /// Number of node pairs joined by at least one edge.
    pub fn connected_pairs(&self) -> usize {
        connected_pairs(canonical_code(self.canonical_edges(), PERMUTATIONS[0]))
    }

    /// True when all three pairs are joined, i.e. the triad closes a triangle.
    pub fn is_closed(&self) -> bool {
        self.connected_pairs() == 3
    }
}

impl fmt::Display for TriadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[inline]
fn edge_bit(src: usize, dst: usize) -> Option<u8> {
    match (src, dst) {
        (0, 1) => Some(0),
        (1, 0) => Some(1),
        (0, 2) => Some(2),
        (2, 0) => Some(3),
        (1, 2) => Some(4),
        (2, 1) => Some(5),
        _ => None,
    }
}

/// Packs the edge flags of an ordered triple `(a, b, c)` into a code.
pub fn triad_code(ab: bool, ba: bool, ac: bool, ca: bool, bc: bool, cb: bool) -> TriadCode {
    [ab, ba, ac, ca, bc, cb]
        .iter()
        .enumerate()
        .filter(|(_, present)| **present)
        .fold(0, |code, (bit, _)| code | (1u8 << bit))
}

fn canonical_code(edges: &[(u8, u8)], perm: [usize; 3]) -> TriadCode {
    edges
        .iter()
        .filter_map(|&(src, dst)| {
            edge_bit(perm[src as usize - 1], perm[dst as usize - 1])
        })
        .fold(0, |code, bit| code | (1u8 << bit))
}

/// Number of unordered pairs of a code that carry at least one edge.
pub fn connected_pairs(code: TriadCode) -> usize {
    [0b000011u8, 0b001100, 0b110000]
        .iter()
        .filter(|mask| code & **mask != 0)
        .count()
}

/// Undirected triads are decided by their edge count alone.
pub fn classify_undirected(edge_count: usize) -> GraphResult<TriadClass> {
    TriadClass::UNDIRECTED
        .get(edge_count)
        .copied()
        .ok_or_else(|| {
            GraphError::InvariantViolation(format!(
                "{edge_count} edges among three nodes of a simple graph"
            ))
        })
}

/// Matches a code against every canonical pattern under every relabelling of positions.
pub fn classify_code(code: TriadCode) -> GraphResult<TriadClass> {
    TriadClass::ALL
        .into_iter()
        .find(|class| {
            PERMUTATIONS
                .iter()
                .any(|perm| canonical_code(class.canonical_edges(), *perm) == code)
        })
        .ok_or_else(|| {
            GraphError::InvariantViolation(format!(
                "edge configuration {code:#08b} matches no canonical triad"
            ))
        })
}

fn code_table() -> &'static [Option<TriadClass>; TRIAD_CODES] {
    static TABLE: OnceLock<[Option<TriadClass>; TRIAD_CODES]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [None; TRIAD_CODES];
        for (code, slot) in table.iter_mut().enumerate() {
            *slot = classify_code(code as TriadCode).ok();
        }
        table
    })
}

/// Cached form of [`classify_code`].
#[inline]
pub fn class_of_code(code: TriadCode) -> GraphResult<TriadClass> {
    code_table()
        .get(code as usize)
        .copied()
        .flatten()
        .ok_or_else(|| {
            GraphError::InvariantViolation(format!(
                "edge configuration {code:#08b} matches no canonical triad"
            ))
        })
}

/// Classifies a code according to the kind of graph it was read from.
#[inline]
pub fn classify(kind: GraphKind, code: TriadCode) -> GraphResult<TriadClass> {
    match kind {
        GraphKind::Directed => class_of_code(code),
        GraphKind::Undirected => classify_undirected(connected_pairs(code)),
    }
}
