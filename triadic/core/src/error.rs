use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid triple: {0}")]
    InvalidTriple(String),
    #[error("node {0} does not exist in the graph")]
    NodeNotFound(String),
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("unsupported filter combination: {0}")]
    UnsupportedFilterCombination(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
