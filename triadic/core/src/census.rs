use crate::triad::{GraphKind, TriadClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

/// Count of triads per isomorphism class.
///
/// A census over `n` nodes always totals `C(n, 3)`. Censuses computed over disjoint sets of
/// triples of the same graph combine with `+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    kind: GraphKind,
    counts: [u64; 16],
}

impl Census {
    pub fn new(kind: GraphKind) -> Self {
        Census {
            kind,
            counts: [0; 16],
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    #[inline]
    pub fn get(&self, class: TriadClass) -> u64 {
        self.counts[class.index()]
    }

    #[inline]
    pub fn record(&mut self, class: TriadClass, n: u64) {
        self.counts[class.index()] += n;
    }

    #[inline]
    pub fn increment(&mut self, class: TriadClass) {
        self.record(class, 1)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Classes of the census kind with their counts, in census order.
    pub fn iter(&self) -> impl Iterator<Item = (TriadClass, u64)> + '_ {
        self.kind
            .classes()
            .iter()
            .map(move |class| (*class, self.get(*class)))
    }

    /// Label to count, the shape plotting and reporting code consumes.
    pub fn to_map(&self) -> BTreeMap<&'static str, u64> {
        self.iter().map(|(class, n)| (class.label(), n)).collect()
    }
}

impl AddAssign<&Census> for Census {
    fn add_assign(&mut self, rhs: &Census) {
        debug_assert_eq!(self.kind, rhs.kind, "merging censuses of different graph kinds");
        for (acc, n) in self.counts.iter_mut().zip(rhs.counts.iter()) {
            *acc += n;
        }
    }
}

impl Add for Census {
    type Output = Census;

    fn add(mut self, rhs: Census) -> Census {
        self += &rhs;
        self
    }
}

#[cfg(test)]
mod census_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn undirected_census_reports_four_classes() {
        let census = Census::new(GraphKind::Undirected);
        let labels: Vec<_> = census.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(labels, vec!["003", "012", "102", "300"]);
    }

    #[test]
    fn merge_adds_element_wise() {
        let mut a = Census::new(GraphKind::Directed);
        a.increment(TriadClass::T003);
        a.record(TriadClass::T030C, 2);

        let mut b = Census::new(GraphKind::Directed);
        b.record(TriadClass::T030C, 3);
        b.increment(TriadClass::T300);

        let merged = a + b;
        assert_eq!(merged.get(TriadClass::T003), 1);
        assert_eq!(merged.get(TriadClass::T030C), 5);
        assert_eq!(merged.get(TriadClass::T300), 1);
        assert_eq!(merged.total(), 7);
        assert_eq!(merged.to_map()["030C"], 5);
        assert_eq!(merged.to_map().len(), 16);
    }
}
