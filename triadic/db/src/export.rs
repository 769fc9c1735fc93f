//! CSV output for census reports and per-node profiles.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::algorithms::census_report::CensusReport;
use crate::algorithms::triadic_profile::NodeTriadProfile;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Writes `class,description,value` rows in report order.
pub fn write_census_csv<W: Write>(report: &CensusReport, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["class", "description", "value"])?;
    for row in &report.rows {
        let value = row.value.to_string();
        wtr.write_record([row.class.label(), row.description, value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_census_csv_file<P: AsRef<Path>>(report: &CensusReport, path: P) -> Result<(), ExportError> {
    tracing::info!(path = ?path.as_ref(), rows = report.rows.len(), "writing census");
    write_census_csv(report, File::create(path)?)
}

#[derive(Serialize)]
struct ProfileRow {
    node: String,
    clustering_coefficient: f64,
    closed_triads: u64,
    open_triads: u64,
    triad_003: u64,
    triad_012: u64,
    triad_102: u64,
    triad_300: u64,
}

impl<V: Display> From<&NodeTriadProfile<V>> for ProfileRow {
    fn from(p: &NodeTriadProfile<V>) -> Self {
        let [triad_003, triad_012, triad_102, triad_300] = p.triads;
        ProfileRow {
            node: p.node.to_string(),
            clustering_coefficient: p.clustering_coefficient,
            closed_triads: p.closed_triads,
            open_triads: p.open_triads,
            triad_003,
            triad_012,
            triad_102,
            triad_300,
        }
    }
}

/// One row per node, header taken from the row fields.
pub fn write_profiles_csv<V: Display, W: Write>(
    profiles: &[NodeTriadProfile<V>],
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in profiles {
        wtr.serialize(ProfileRow::from(p))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_profiles_csv_file<V: Display, P: AsRef<Path>>(
    profiles: &[NodeTriadProfile<V>],
    path: P,
) -> Result<(), ExportError> {
    tracing::info!(path = ?path.as_ref(), nodes = profiles.len(), "writing node profiles");
    write_profiles_csv(profiles, File::create(path)?)
}
