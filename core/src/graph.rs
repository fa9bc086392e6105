use std::fmt;

use crate::error::{GraphError, Result};

/// Vertex index in `[0, N)`.
pub type VertexId = usize;

/// An outgoing arc in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: f64,
}

/// Immutable edge-weighted digraph.
///
/// One adjacency list per vertex, each holding outgoing arcs in insertion
/// order. Parallel arcs are kept as separate entries. There is no public way
/// to add arcs: a `Digraph` comes out of the loader fully built and is
/// read-only from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph {
    outgoing: Vec<Vec<Edge>>,
    arc_count: usize,
}

impl Digraph {
    /// Number of vertices (the graph's order).
    #[doc(alias = "order")]
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of arcs ever inserted (the graph's size).
    #[doc(alias = "size")]
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// All vertex indices in ascending order.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.outgoing.len()
    }

    /// Number of arcs leaving `vertex`, parallel arcs counted individually.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.arcs(vertex).map(|arcs| arcs.len())
    }

    /// Outgoing arcs of `vertex` in insertion order.
    pub fn arcs(&self, vertex: VertexId) -> Result<&[Edge]> {
        self.check_vertex(vertex)?;
        Ok(&self.outgoing[vertex])
    }

    /// Reject indices outside `[0, N)`.
    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.outgoing.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                order: self.outgoing.len(),
            })
        }
    }

    /// Unchecked adjacency access for callers that validated `vertex` already.
    pub(crate) fn neighbors_out(&self, vertex: VertexId) -> &[Edge] {
        &self.outgoing[vertex]
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.outgoing.capacity() * size_of::<Vec<Edge>>();
        let arcs: usize = self
            .outgoing
            .iter()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();

        size_of::<Self>() + lists + arcs
    }
}

/// Writes the graph in edge-list description form: the vertex count, then
/// one `from to weight` line per arc, grouped by source vertex with each
/// vertex's insertion order preserved.
impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        for (from, arcs) in self.outgoing.iter().enumerate() {
            for arc in arcs {
                writeln!(f, "{} {} {}", from, arc.target, arc.weight)?;
            }
        }
        Ok(())
    }
}

/// The only insertion path into a [`Digraph`]. Used by the loader; consumed
/// by [`DigraphBuilder::build`] so nothing can mutate the finished graph.
#[derive(Debug)]
pub(crate) struct DigraphBuilder {
    outgoing: Vec<Vec<Edge>>,
    arc_count: usize,
}

impl DigraphBuilder {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); vertex_count],
            arc_count: 0,
        }
    }

    /// Append an arc. Both endpoints must be in range.
    pub(crate) fn insert_arc(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<()> {
        let order = self.outgoing.len();
        for vertex in [from, to] {
            if vertex >= order {
                return Err(GraphError::VertexOutOfRange { vertex, order });
            }
        }
        self.outgoing[from].push(Edge { target: to, weight });
        self.arc_count += 1;
        Ok(())
    }

    pub(crate) fn build(self) -> Digraph {
        Digraph {
            outgoing: self.outgoing,
            arc_count: self.arc_count,
        }
    }
}
