//! Edge-list loader.
//!
//! Description format, one record per line:
//!
//! ```text
//! <N>
//! <from> <to> <weight>
//! ...
//! ```
//!
//! Arcs are inserted in file order, which is observable through parallel-arc
//! weight lookup and shortest-path tie-breaking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Digraph, DigraphBuilder, VertexId};

/// Default cap on the declared vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 24;

/// Loader settings.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Largest vertex count a description may declare. Checked before the
    /// adjacency lists are allocated.
    pub max_vertices: usize,
    /// Skip whitespace-only arc lines instead of rejecting them.
    pub allow_blank_lines: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            allow_blank_lines: false,
        }
    }
}

impl Digraph {
    /// Load a description file with default options.
    ///
    /// The defaults cap the vertex count at [`DEFAULT_MAX_VERTICES`]; use
    /// [`Digraph::load_with`] to raise it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default())
    }

    /// Load a description file.
    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "cannot open graph description");
            GraphError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let graph = Self::from_reader(BufReader::new(file), options).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "graph description rejected");
        })?;
        debug!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            arcs = graph.arc_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Load a description from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Self> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(GraphError::parse(1, "missing vertex count")),
        };
        let vertex_count = parse_vertex_count(&header)?;
        if vertex_count > options.max_vertices {
            return Err(GraphError::TooManyVertices {
                requested: vertex_count,
                limit: options.max_vertices,
            });
        }

        let mut builder = DigraphBuilder::new(vertex_count);
        for (idx, line) in lines.enumerate() {
            let line = line?;
            let line_no = idx + 2;

            if line.trim().is_empty() {
                if options.allow_blank_lines {
                    continue;
                }
                return Err(GraphError::parse(line_no, "blank line"));
            }

            let (from, to, weight) = parse_arc(&line, line_no)?;
            builder
                .insert_arc(from, to, weight)
                .map_err(|e| GraphError::parse(line_no, e.to_string()))?;
        }

        let graph = builder.build();
        debug!(
            vertices = graph.vertex_count(),
            arcs = graph.arc_count(),
            "graph description parsed"
        );
        Ok(graph)
    }
}

/// Parse a description held in memory, using default options.
///
/// The vertex count is capped at [`DEFAULT_MAX_VERTICES`]; larger graphs
/// need [`Digraph::from_reader`] with a raised [`LoadOptions::max_vertices`].
impl FromStr for Digraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes(), &LoadOptions::default())
    }
}

fn parse_vertex_count(line: &str) -> Result<usize> {
    let mut fields = line.split_whitespace();
    let token = fields
        .next()
        .ok_or_else(|| GraphError::parse(1, "missing vertex count"))?;
    if fields.next().is_some() {
        return Err(GraphError::parse(1, "expected a single vertex count"));
    }
    token
        .parse::<usize>()
        .map_err(|_| GraphError::parse(1, format!("invalid vertex count '{}'", token)))
}

fn parse_arc(line: &str, line_no: usize) -> Result<(VertexId, VertexId, f64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [from, to, weight] = fields.as_slice() else {
        return Err(GraphError::parse(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    let from = parse_vertex(from, line_no)?;
    let to = parse_vertex(to, line_no)?;
    let weight = weight
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| GraphError::parse(line_no, format!("invalid weight '{}'", weight)))?;

    Ok((from, to, weight))
}

fn parse_vertex(token: &str, line_no: usize) -> Result<VertexId> {
    token
        .parse::<VertexId>()
        .map_err(|_| GraphError::parse(line_no, format!("invalid vertex '{}'", token)))
}
