//! weighted-digraph-core: immutable edge-weighted digraph engine.
//!
//! Builds a graph once from an edge-list description (vertex count, then
//! `from to weight` lines) and answers read-only queries over it: out-degree,
//! arc and path weights, direct connectivity, reachability and
//! minimum-weight paths.
//!
//! Every query validates its vertex indices and reports
//! [`GraphError::VertexOutOfRange`] instead of panicking. A loaded
//! [`Digraph`] has no mutating methods and is `Send + Sync`, so it can be
//! shared between reader threads without locking.

mod error;
mod graph;
mod load;
mod query;
mod shortest_path;

pub use error::{GraphError, Result};
pub use graph::{Digraph, Edge, VertexId};
pub use load::{LoadOptions, DEFAULT_MAX_VERTICES};
pub use shortest_path::{shortest_path, ShortestPath};
