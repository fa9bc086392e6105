use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{Digraph, VertexId};

/// A minimum-weight path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Vertices from source to target, both inclusive.
    pub vertices: Vec<VertexId>,
    /// Sum of the arc weights along `vertices`.
    pub weight: f64,
    /// Number of vertices finalized before the target was reached.
    pub finalized: usize,
}

/// Minimum-weight path from `from` to `to` (Dijkstra).
///
/// Arc weights must be non-negative for the result to be optimal; this is
/// not checked. The search stops as soon as `to` is finalized.
///
/// The next vertex to finalize is the unfinalized one with the smallest
/// tentative distance, ties going to the lowest vertex index. Relaxation is
/// strict (`<`), so among equal-weight alternatives the first one discovered
/// keeps its predecessor.
///
/// Returns [`GraphError::NoPath`] only if `to` is unreachable. A reachable
/// target whose weight sum overflows `f64` comes back with `weight` of +inf.
pub fn shortest_path(graph: &Digraph, from: VertexId, to: VertexId) -> Result<ShortestPath> {
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    let n = graph.vertex_count();
    // `None` means not reached yet; a reached vertex may still sit at +inf
    // once finite weights overflow.
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut finalized_count = 0usize;

    // Min-heap on (distance, vertex); lazy deletion of stale entries.
    let mut heap = BinaryHeap::new();
    dist[from] = Some(0.0);
    heap.push(Reverse((OrderedFloat(0.0), from)));

    while let Some(Reverse((OrderedFloat(d), current))) = heap.pop() {
        if finalized[current] || dist[current].is_some_and(|best| d > best) {
            continue;
        }
        finalized[current] = true;
        finalized_count += 1;

        if current == to {
            let vertices = reconstruct_path(&pred, from, to);
            trace!(from, to, weight = d, finalized = finalized_count, "shortest path resolved");
            return Ok(ShortestPath {
                vertices,
                weight: d,
                finalized: finalized_count,
            });
        }

        for arc in graph.neighbors_out(current) {
            if finalized[arc.target] {
                continue;
            }
            let candidate = d + arc.weight;
            if dist[arc.target].map_or(true, |best| candidate < best) {
                dist[arc.target] = Some(candidate);
                pred[arc.target] = Some(current);
                heap.push(Reverse((OrderedFloat(candidate), arc.target)));
            }
        }
    }

    trace!(from, to, finalized = finalized_count, "no path");
    Err(GraphError::NoPath { from, to })
}

/// Walk predecessor pointers from `to` back to `from`.
fn reconstruct_path(pred: &[Option<VertexId>], from: VertexId, to: VertexId) -> Vec<VertexId> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match pred[current] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

impl Digraph {
    /// Vertices of a minimum-weight path from `from` to `to`, both inclusive.
    ///
    /// See [`shortest_path`] for tie-breaking and the non-negative weight
    /// precondition.
    pub fn minimum_weight_path(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>> {
        shortest_path(self, from, to).map(|path| path.vertices)
    }
}
