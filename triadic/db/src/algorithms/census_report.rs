//! Post-processing of a computed census into an ordered report.
//!
//! A [`CensusQuery`] never touches the census it reads. Filters are applied in a fixed
//! order: normalise over the full census, sort, drop the requested classes, then keep the
//! last `top_n` rows (the largest counts when sorting by count).

use serde::Serialize;
use triadic_core::{Census, GraphError, GraphKind, GraphResult, TriadClass};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Ascending count, ties in class order.
    #[default]
    Count,
    /// Ascending class label.
    Label,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CensusQuery {
    sort_by: SortBy,
    normalize: bool,
    top_n: Option<usize>,
    ignore_no_edges: bool,
    ignore_open_triads: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CensusRow {
    pub class: TriadClass,
    pub description: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CensusReport {
    pub kind: GraphKind,
    pub normalized: bool,
    pub rows: Vec<CensusRow>,
}

impl CensusQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Keeps the last `n` rows after sorting; `0` keeps every row.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Drops `003`.
    pub fn ignore_no_edges(mut self, ignore: bool) -> Self {
        self.ignore_no_edges = ignore;
        self
    }

    /// Drops every class with fewer than three connected pairs.
    pub fn ignore_open_triads(mut self, ignore: bool) -> Self {
        self.ignore_open_triads = ignore;
        self
    }

    pub fn apply(&self, census: &Census) -> GraphResult<CensusReport> {
        let top_n = self.top_n.filter(|n| *n > 0);
        if top_n.is_some() && self.sort_by == SortBy::Label {
            tracing::warn!("rejecting top_n on a census sorted by label");
            return Err(GraphError::UnsupportedFilterCombination(
                "top_n selects the largest classes and needs sorting by count".to_string(),
            ));
        }

        let kind = census.kind();
        let total = census.total() as f64;
        let mut rows: Vec<CensusRow> = census
            .iter()
            .map(|(class, n)| {
                let value = match (self.normalize, total > 0.0) {
                    (false, _) => n as f64,
                    (true, true) => n as f64 / total,
                    (true, false) => 0.0,
                };
                CensusRow {
                    class,
                    description: class.description(kind),
                    value,
                }
            })
            .collect();

        match self.sort_by {
            SortBy::Count => rows.sort_by(|a, b| a.value.total_cmp(&b.value)),
            SortBy::Label => rows.sort_by(|a, b| a.class.label().cmp(b.class.label())),
        }

        rows.retain(|row| {
            !(self.ignore_no_edges && row.class == TriadClass::T003)
                && !(self.ignore_open_triads && TriadClass::OPEN.contains(&row.class))
        });

        if let Some(n) = top_n {
            let skip = rows.len().saturating_sub(n);
            rows.drain(..skip);
        }

        Ok(CensusReport {
            kind,
            normalized: self.normalize,
            rows,
        })
    }
}

impl CensusReport {
    pub fn labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|row| row.class.label()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// Axis caption used when the report is plotted.
    pub fn value_label(&self) -> &'static str {
        if self.normalized {
            "Proportion"
        } else {
            "Count"
        }
    }
}
