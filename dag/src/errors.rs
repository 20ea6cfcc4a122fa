use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Missing vertex count line")]
    MissingVertexCount,

    #[error("Invalid vertex count: {0:?}")]
    InvalidVertexCount(String),

    #[error("Expected {expected} vertex names, found {found}")]
    TooFewVertexNames { expected: usize, found: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
