use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::NodeId;

/// Failures while reading a graph description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line_number}: {reason} in {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        reason: String,
    },
}

/// Endpoints that cannot be searched between.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("node {node} not found in graph")]
    UnknownNode { node: NodeId },
}
