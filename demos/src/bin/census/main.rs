//! Loads an edge list, prints a summary of the graph and its triad census, and optionally
//! writes per-node triad profiles.
//!
//! ```text
//! census resources/karate.csv.gz --header --normalize --top-n 3
//! RUST_LOG=debug census data/ --filter '\.tsv$' --delimiter '\t' --directed
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use triadic_core::GraphKind;
use triadic_db::algorithms::census_report::{CensusQuery, SortBy};
use triadic_db::algorithms::connected_components::remove_isolated_nodes;
use triadic_db::algorithms::triadic_census::triadic_census;
use triadic_db::algorithms::triadic_profile::triadic_profiles;
use triadic_db::export::{write_census_csv_file, write_profiles_csv_file};
use triadic_db::graph_info::GraphInfo;
use triadic_db::loaders::csv::{is_directed_dataset, CsvLoader};

#[derive(Parser)]
#[command(name = "census", version, about = "Triad census of an edge list")]
struct Args {
    /// Edge list file (plain or .gz) or a directory of them
    path: PathBuf,

    /// Treat edges as directed. Implied when the file name mentions "directed"
    #[arg(long)]
    directed: bool,

    /// First line of every file is a header
    #[arg(long)]
    header: bool,

    /// Field delimiter, `\t` for tab
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Skip lines starting with this character
    #[arg(long)]
    comment: Option<char>,

    /// Only load files whose path matches this regex
    #[arg(long)]
    filter: Option<regex::Regex>,

    /// Drop nodes without edges before counting
    #[arg(long)]
    drop_isolated: bool,

    /// Report proportions instead of counts
    #[arg(long)]
    normalize: bool,

    #[arg(long, value_enum, default_value = "count")]
    sort_by: SortArg,

    /// Keep only the N most frequent classes
    #[arg(long)]
    top_n: Option<usize>,

    /// Leave out the empty triad
    #[arg(long)]
    ignore_no_edges: bool,

    /// Leave out the open classes 003 to 111U, keeping 201 and every closed class
    #[arg(long)]
    ignore_open_triads: bool,

    /// Also write the report to this CSV file
    #[arg(long)]
    census_out: Option<PathBuf>,

    /// Write per-node triad profiles to this CSV file
    #[arg(long)]
    profiles_out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Count,
    Label,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Count => SortBy::Count,
            SortArg::Label => SortBy::Label,
        }
    }
}

fn delimiter_byte(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single byte, got {s:?}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let file_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let kind = if args.directed || is_directed_dataset(&file_name) {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    };

    let mut loader = CsvLoader::new(&args.path)
        .set_header(args.header)
        .set_delimiter(delimiter_byte(&args.delimiter)?);
    if let Some(c) = args.comment {
        loader = loader.set_comment(u8::try_from(c)?);
    }
    if let Some(filter) = args.filter {
        loader = loader.with_filter(filter);
    }

    let mut graph = loader.load_edge_list(kind)?.with_name(file_name);
    if args.drop_isolated {
        graph = remove_isolated_nodes(&graph);
    }
    tracing::info!(nodes = graph.len(), edges = graph.edges_len(), ?kind, "graph ready");

    println!("{}", GraphInfo::of(&graph));
    println!();

    let mut query = CensusQuery::new()
        .sort_by(args.sort_by.into())
        .normalize(args.normalize)
        .ignore_no_edges(args.ignore_no_edges)
        .ignore_open_triads(args.ignore_open_triads);
    if let Some(n) = args.top_n {
        query = query.top_n(n);
    }

    let census = triadic_census(&graph)?;
    let report = query.apply(&census)?;

    println!("{:<6} {:<40} {}", "Triad", "Description", report.value_label());
    for row in &report.rows {
        println!("{:<6} {:<40} {}", row.class.label(), row.description, row.value);
    }

    if let Some(path) = args.census_out {
        write_census_csv_file(&report, path)?;
    }
    if let Some(path) = args.profiles_out {
        write_profiles_csv_file(&triadic_profiles(&graph), path)?;
    }
    Ok(())
}
