//! Provider error types.

use crate::domain::DomainError;
use crate::graph::GraphError;

/// Errors from loading or serving transit network data.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Reading network data from disk failed
    #[error("failed to read network data: {0}")]
    Io(#[from] std::io::Error),

    /// A network data file is not valid JSON (or has the wrong shape)
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A record failed domain validation on conversion
    #[error("invalid network data: {0}")]
    InvalidData(String),

    /// A converted value violated a domain invariant
    #[error("invalid network data: {0}")]
    Domain(#[from] DomainError),

    /// The loaded records don't form a consistent graph
    #[error("inconsistent network data: {0}")]
    Graph(#[from] GraphError),

    /// A data directory contained no network files
    #[error("no network files found in {0}")]
    EmptyDataDir(String),
}
