use std::io;
use std::path::PathBuf;

use crate::graph::VertexId;

/// Errors raised while loading a digraph or answering queries against it.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("graph load failed: cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("graph load failed: {0}")]
    Io(#[from] io::Error),

    #[error("graph load failed: line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("graph load failed: {requested} vertices exceeds limit of {limit}")]
    TooManyVertices { requested: usize, limit: usize },

    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange { vertex: VertexId, order: usize },

    #[error("no path from vertex {from} to vertex {to}")]
    NoPath { from: VertexId, to: VertexId },
}

impl GraphError {
    /// True for failures that prevent a graph from being built at all.
    /// Query-time errors (`VertexOutOfRange`, `NoPath`) return false.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            GraphError::Open { .. }
                | GraphError::Io(_)
                | GraphError::Parse { .. }
                | GraphError::TooManyVertices { .. }
        )
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
