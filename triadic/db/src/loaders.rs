pub mod csv {
    use flate2::read::GzDecoder;
    use regex::Regex;
    use serde::de::DeserializeOwned;
    use std::collections::VecDeque;
    use std::fs::{self, File};
    use std::io::{self, BufReader, Read};
    use std::path::{Path, PathBuf};
    use thiserror::Error;
    use triadic_core::{Graph, GraphKind};

    #[derive(Error, Debug)]
    pub enum LoaderError {
        #[error("failed to read {path:?}")]
        Io {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
        #[error(transparent)]
        Csv(#[from] ::csv::Error),
        #[error("record {line} of {path:?} has no column {column}")]
        ShortRecord {
            path: PathBuf,
            line: u64,
            column: usize,
        },
        #[error("{path:?} has no column named {name:?}")]
        MissingColumn { path: PathBuf, name: String },
        #[error("dataset not found, tried {tried:?}")]
        NotFound { tried: Vec<PathBuf> },
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Columns {
        Index(usize, usize),
        Named(String, String),
    }

    /// Reads edge lists from a CSV file, a gzipped CSV file, or every matching file under a
    /// directory.
    #[derive(Debug)]
    pub struct CsvLoader {
        path: PathBuf,
        regex_filter: Option<Regex>,
        header: bool,
        delimiter: u8,
        comment: Option<u8>,
        columns: Columns,
    }

    impl CsvLoader {
        pub fn new<P: Into<PathBuf>>(p: P) -> Self {
            Self {
                path: p.into(),
                regex_filter: None,
                header: false,
                delimiter: b',',
                comment: None,
                columns: Columns::Index(0, 1),
            }
        }

        pub fn set_header(mut self, h: bool) -> Self {
            self.header = h;
            self
        }

        pub fn set_delimiter(mut self, d: u8) -> Self {
            self.delimiter = d;
            self
        }

        /// Lines starting with this byte are skipped, e.g. `b'#'` for SNAP edge lists.
        pub fn set_comment(mut self, c: u8) -> Self {
            self.comment = Some(c);
            self
        }

        pub fn set_columns(mut self, src: usize, dst: usize) -> Self {
            self.columns = Columns::Index(src, dst);
            self
        }

        /// Selects the endpoint columns by header name. Implies `set_header(true)`.
        pub fn set_column_names<S: Into<String>>(mut self, src: S, dst: S) -> Self {
            self.header = true;
            self.columns = Columns::Named(src.into(), dst.into());
            self
        }

        pub fn with_filter(mut self, r: Regex) -> Self {
            self.regex_filter = Some(r);
            self
        }

        fn accept_file(&self, p: PathBuf, paths: &mut Vec<PathBuf>) {
            let is_match = match &self.regex_filter {
                Some(pattern) => p
                    .to_str()
                    .filter(|file_name| pattern.is_match(file_name))
                    .is_some(),
                None => true,
            };
            if is_match {
                paths.push(p);
            }
        }

        fn files_vec(&self) -> Result<Vec<PathBuf>, LoaderError> {
            let io_err = |path: &Path| {
                let path = path.to_path_buf();
                move |source| LoaderError::Io { path, source }
            };

            if !fs::metadata(&self.path).map_err(io_err(&self.path))?.is_dir() {
                return Ok(vec![self.path.clone()]);
            }

            let mut paths = vec![];
            let mut queue = VecDeque::from([self.path.clone()]);
            while let Some(dir) = queue.pop_back() {
                for entry in fs::read_dir(&dir).map_err(io_err(&dir))? {
                    let p = entry.map_err(io_err(&dir))?.path();
                    if p.is_dir() {
                        queue.push_back(p);
                    } else {
                        self.accept_file(p, &mut paths);
                    }
                }
            }
            paths.sort();
            Ok(paths)
        }

        fn csv_reader(&self, file_path: &Path) -> Result<::csv::Reader<Box<dyn Read>>, LoaderError> {
            let is_gziped = file_path
                .file_name()
                .and_then(|name| name.to_str())
                .filter(|name| name.ends_with(".gz"))
                .is_some();

            let f = File::open(file_path).map_err(|source| LoaderError::Io {
                path: file_path.to_path_buf(),
                source,
            })?;
            let inner: Box<dyn Read> = if is_gziped {
                Box::new(BufReader::new(GzDecoder::new(f)))
            } else {
                Box::new(BufReader::new(f))
            };

            Ok(::csv::ReaderBuilder::new()
                .has_headers(self.header)
                .delimiter(self.delimiter)
                .comment(self.comment)
                .trim(::csv::Trim::All)
                .flexible(true)
                .from_reader(inner))
        }

        fn column_indices(
            &self,
            path: &Path,
            reader: &mut ::csv::Reader<Box<dyn Read>>,
        ) -> Result<(usize, usize), LoaderError> {
            match &self.columns {
                Columns::Index(src, dst) => Ok((*src, *dst)),
                Columns::Named(src, dst) => {
                    let headers = reader.headers()?.clone();
                    let find = |name: &String| {
                        headers
                            .iter()
                            .position(|h| h == name)
                            .ok_or_else(|| LoaderError::MissingColumn {
                                path: path.to_path_buf(),
                                name: name.clone(),
                            })
                    };
                    Ok((find(src)?, find(dst)?))
                }
            }
        }

        /// Deserializes every record into `REC` and hands it to `loader`.
        pub fn load_into_graph<G, REC, F>(&self, g: &mut G, mut loader: F) -> Result<(), LoaderError>
        where
            REC: DeserializeOwned,
            F: FnMut(REC, &mut G),
        {
            for path in self.files_vec()? {
                tracing::info!(?path, "loading records");
                let mut reader = self.csv_reader(&path)?;
                for rec in reader.deserialize::<REC>() {
                    loader(rec?, g);
                }
            }
            Ok(())
        }

        /// Builds a graph from the two endpoint columns of every record.
        pub fn load_edge_list(&self, kind: GraphKind) -> Result<Graph<String>, LoaderError> {
            let mut graph = Graph::new(kind);
            let mut record = ::csv::StringRecord::new();

            for path in self.files_vec()? {
                tracing::info!(?path, ?kind, "loading edge list");
                let mut reader = self.csv_reader(&path)?;
                let (src_col, dst_col) = self.column_indices(&path, &mut reader)?;

                while reader.read_record(&mut record)? {
                    let field = |column: usize| {
                        record.get(column).ok_or_else(|| LoaderError::ShortRecord {
                            path: path.clone(),
                            line: record.position().map_or(0, |p| p.line()),
                            column,
                        })
                    };
                    let (src, dst) = (field(src_col)?, field(dst_col)?);
                    graph.add_edge(src.to_string(), dst.to_string());
                }
            }

            tracing::debug!(nodes = graph.len(), edges = graph.edges_len(), "edge list loaded");
            Ok(graph)
        }
    }

    /// Dataset names mentioning `directed` or `directional` hold directed edges.
    pub fn is_directed_dataset(name: &str) -> bool {
        ["directed", "directional"]
            .iter()
            .any(|marker| name.contains(marker))
    }

    /// Tries `name`, `name.csv` and `name.csv.gz` under `dir`.
    pub fn find_local_dataset<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf, LoaderError> {
        let tried: Vec<PathBuf> = ["", ".csv", ".csv.gz"]
            .iter()
            .map(|ext| dir.as_ref().join(format!("{name}{ext}")))
            .collect();
        tried
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or(LoaderError::NotFound { tried })
    }

    /// Loads a local `src,dst` dataset, directed when its name says so, named after it.
    pub fn load_local_dataset<P: AsRef<Path>>(dir: P, name: &str) -> Result<Graph<String>, LoaderError> {
        let path = find_local_dataset(dir, name)?;
        let kind = if is_directed_dataset(name) {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        let graph = CsvLoader::new(path)
            .set_column_names("src", "dst")
            .load_edge_list(kind)?;
        Ok(graph.with_name(name))
    }
}

#[cfg(test)]
mod csv_loader_test {
    use crate::loaders::csv::{
        find_local_dataset, is_directed_dataset, load_local_dataset, CsvLoader, LoaderError,
    };
    use regex::Regex;
    use serde::Deserialize;
    use std::path::PathBuf;
    use triadic_core::{Graph, GraphKind};

    fn resources() -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "resources/test"].iter().collect()
    }

    #[test]
    fn regex_match() {
        let r = Regex::new(r".+karate").unwrap();
        assert!(r.is_match("resources/test/karate.csv.gz"));
        assert!(!r.is_match("resources/test/ca-tiny.txt"));
    }

    #[test]
    fn loads_gzipped_csv_with_header() {
        let g = CsvLoader::new(resources().join("karate.csv.gz"))
            .set_header(true)
            .load_edge_list(GraphKind::Undirected)
            .expect("Csv did not parse.");
        assert_eq!(g.len(), 34);
        assert_eq!(g.edges_len(), 78);
    }

    #[test]
    fn loads_snap_edge_list() {
        let g = CsvLoader::new(resources().join("ca-tiny.txt"))
            .set_delimiter(b'\t')
            .set_comment(b'#')
            .load_edge_list(GraphKind::Undirected)
            .expect("Edge list did not parse.");
        assert_eq!(g.len(), 6);
        // one edge is listed in both directions
        assert_eq!(g.edges_len(), 7);
    }

    #[test]
    fn walks_directories_with_filter() {
        let g = CsvLoader::new(resources())
            .set_header(true)
            .with_filter(Regex::new(r"karate\.csv\.gz$").unwrap())
            .load_edge_list(GraphKind::Undirected)
            .unwrap();
        assert_eq!(g.edges_len(), 78);
    }

    #[test]
    fn wrong_delimiter_is_a_short_record() {
        let result = CsvLoader::new(resources().join("karate.csv.gz"))
            .set_header(true)
            .set_delimiter(b';')
            .load_edge_list(GraphKind::Undirected);
        assert!(matches!(result, Err(LoaderError::ShortRecord { column: 1, .. })));
    }

    #[test]
    fn missing_named_column() {
        let result = CsvLoader::new(resources().join("karate.csv.gz"))
            .set_column_names("from", "to")
            .load_edge_list(GraphKind::Undirected);
        assert!(matches!(result, Err(LoaderError::MissingColumn { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CsvLoader::new(resources().join("nope.csv")).load_edge_list(GraphKind::Directed);
        assert!(matches!(result, Err(LoaderError::Io { .. })));
    }

    #[test]
    fn local_datasets() {
        assert!(is_directed_dataset("quotes-directed"));
        assert!(is_directed_dataset("bidirectional-links"));
        assert!(!is_directed_dataset("karate"));

        assert_eq!(
            find_local_dataset(resources(), "karate").unwrap(),
            resources().join("karate.csv.gz")
        );
        match find_local_dataset(resources(), "missing") {
            Err(LoaderError::NotFound { tried }) => assert_eq!(tried.len(), 3),
            other => panic!("unexpected {other:?}"),
        }

        let g = load_local_dataset(resources(), "quotes-directed").unwrap();
        assert!(g.is_directed());
        assert_eq!(g.name(), Some("quotes-directed"));
        assert_eq!(g.len(), 30);
        assert_eq!(g.edges_len(), 120);
    }

    #[derive(Deserialize)]
    struct WeightedEdge {
        src: String,
        dst: String,
        weight: f64,
    }

    #[test]
    fn deserializes_records() {
        let mut g: Graph<String> = Graph::directed();
        let mut total_weight = 0.0;
        CsvLoader::new(resources().join("quotes-directed.csv"))
            .set_header(true)
            .load_into_graph(&mut g, |edge: WeightedEdge, g| {
                total_weight += edge.weight;
                g.add_edge(edge.src, edge.dst);
            })
            .unwrap();
        assert_eq!(g.edges_len(), 120);
        assert!((total_weight - 1.0).abs() < 1e-6);
    }
}
