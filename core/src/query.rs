//! Read-only structural queries: arc and path weights, direct connectivity
//! and reachability.

use crate::error::Result;
use crate::graph::{Digraph, VertexId};

impl Digraph {
    /// Weight of the arc `from → to`, or `f64::INFINITY` if there is none.
    ///
    /// With parallel arcs the most recently inserted one wins, not the
    /// lightest.
    pub fn arc_weight(&self, from: VertexId, to: VertexId) -> Result<f64> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weight_unchecked(from, to))
    }

    /// Sum of arc weights along consecutive pairs of `path`.
    ///
    /// Returns `f64::INFINITY` as soon as a pair has no arc. Paths with fewer
    /// than two vertices weigh 0. Every vertex is range-checked up front, even
    /// those past a broken pair. A sum of finite weights that overflows also
    /// yields +inf.
    pub fn path_weight(&self, path: &[VertexId]) -> Result<f64> {
        for &vertex in path {
            self.check_vertex(vertex)?;
        }

        let mut total = 0.0;
        for pair in path.windows(2) {
            let weight = self.weight_unchecked(pair[0], pair[1]);
            if weight == f64::INFINITY {
                return Ok(f64::INFINITY);
            }
            total += weight;
        }
        Ok(total)
    }

    /// True iff at least one arc `from → to` exists.
    pub fn are_connected(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.neighbors_out(from).iter().any(|arc| arc.target == to))
    }

    /// Depth-first reachability from `from` to `to`, ignoring weights.
    ///
    /// `from` starts out visited, so the search only succeeds through a
    /// neighbor: `does_path_exist(v, v)` is false even when `v` lies on a
    /// cycle or carries a self-loop.
    pub fn does_path_exist(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let mut visited = vec![false; self.vertex_count()];
        visited[from] = true;

        // Each frame is (vertex, index of the next arc to try).
        let mut stack: Vec<(VertexId, usize)> = vec![(from, 0)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            let Some(arc) = self.neighbors_out(vertex).get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if visited[arc.target] {
                continue;
            }
            if arc.target == to {
                return Ok(true);
            }
            visited[arc.target] = true;
            stack.push((arc.target, 0));
        }

        Ok(false)
    }

    /// True iff every consecutive pair in `path` is joined by an arc and the
    /// summed weight is finite.
    ///
    /// A path made entirely of real arcs whose weights overflow `f64` sums to
    /// +inf and is reported invalid, same as a broken path.
    pub fn is_path_valid(&self, path: &[VertexId]) -> Result<bool> {
        Ok(self.path_weight(path)?.is_finite())
    }

    fn weight_unchecked(&self, from: VertexId, to: VertexId) -> f64 {
        self.neighbors_out(from)
            .iter()
            .rev()
            .find(|arc| arc.target == to)
            .map_or(f64::INFINITY, |arc| arc.weight)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::tests::{graph, make_chain, make_cycle, make_star};
    use crate::graph::Digraph;

    fn sample() -> Digraph {
        "3\n0 1 5\n1 2 3\n".parse().unwrap()
    }

    // --- Weight lookup ---

    #[test]
    fn test_arc_weight_sample() {
        let g = sample();
        assert_eq!(g.arc_weight(0, 1).unwrap(), 5.0);
        assert_eq!(g.arc_weight(1, 2).unwrap(), 3.0);
        assert_eq!(g.arc_weight(0, 2).unwrap(), f64::INFINITY);
        assert_eq!(g.arc_weight(1, 0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_arc_weight_parallel_last_wins() {
        let g: Digraph = "2\n0 1 5\n0 1 2\n".parse().unwrap();
        assert_eq!(g.arc_weight(0, 1).unwrap(), 2.0);
        assert_eq!(g.out_degree(0).unwrap(), 2);

        // Last, not minimum.
        let g: Digraph = "2\n0 1 2\n0 1 5\n".parse().unwrap();
        assert_eq!(g.arc_weight(0, 1).unwrap(), 5.0);
    }

    #[test]
    fn test_arc_weight_parallel_interleaved() {
        let g = graph(3, &[(0, 1, 4.0), (0, 2, 1.0), (0, 1, 9.0), (0, 2, 6.0), (0, 1, 3.0)]);
        assert_eq!(g.arc_weight(0, 1).unwrap(), 3.0);
        assert_eq!(g.arc_weight(0, 2).unwrap(), 6.0);
    }

    #[test]
    fn test_arc_weight_self_loop() {
        let g = graph(2, &[(1, 1, 0.5)]);
        assert_eq!(g.arc_weight(1, 1).unwrap(), 0.5);
        assert_eq!(g.arc_weight(0, 0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_arc_weight_out_of_range() {
        let g = sample();
        assert!(matches!(
            g.arc_weight(3, 0),
            Err(GraphError::VertexOutOfRange { vertex: 3, order: 3 })
        ));
        assert!(matches!(
            g.arc_weight(0, 9),
            Err(GraphError::VertexOutOfRange { vertex: 9, order: 3 })
        ));
    }

    // --- Path weight / validity ---

    #[test]
    fn test_path_weight_sample() {
        let g = sample();
        assert_eq!(g.path_weight(&[0, 1, 2]).unwrap(), 8.0);
        assert_eq!(g.path_weight(&[0, 2]).unwrap(), f64::INFINITY);
        assert_eq!(g.path_weight(&[0]).unwrap(), 0.0);
        assert_eq!(g.path_weight(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_path_weight_keeps_fractions() {
        let g = graph(3, &[(0, 1, 0.25), (1, 2, 0.5)]);
        assert_eq!(g.path_weight(&[0, 1, 2]).unwrap(), 0.75);
    }

    #[test]
    fn test_path_weight_broken_midway() {
        let g = make_chain(5, 1.0);
        assert_eq!(g.path_weight(&[0, 1, 3, 4]).unwrap(), f64::INFINITY);
        assert_eq!(g.path_weight(&[0, 1, 2, 3, 4]).unwrap(), 4.0);
    }

    #[test]
    fn test_path_weight_revisits() {
        let g = make_cycle(3);
        assert_eq!(g.path_weight(&[0, 1, 2, 0, 1]).unwrap(), 4.0);
    }

    #[test]
    fn test_path_weight_validates_every_vertex() {
        let g = sample();
        // The broken 0→2 pair would short-circuit, but 7 is still rejected.
        assert!(matches!(
            g.path_weight(&[0, 2, 7]),
            Err(GraphError::VertexOutOfRange { vertex: 7, .. })
        ));
        assert!(g.path_weight(&[5]).is_err());
    }

    #[test]
    fn test_is_path_valid() {
        let g = sample();
        assert!(g.is_path_valid(&[0, 1, 2]).unwrap());
        assert!(!g.is_path_valid(&[0, 2]).unwrap());
        assert!(g.is_path_valid(&[2]).unwrap());
        assert!(g.is_path_valid(&[]).unwrap());
        assert!(g.is_path_valid(&[0, 3]).is_err());
    }

    #[test]
    fn test_is_path_valid_negative_weights() {
        let g = graph(3, &[(0, 1, -2.0), (1, 2, -1.0)]);
        assert_eq!(g.path_weight(&[0, 1, 2]).unwrap(), -3.0);
        assert!(g.is_path_valid(&[0, 1, 2]).unwrap());
    }

    #[test]
    fn test_path_weight_overflow_is_infinite() {
        let g: Digraph = "3\n0 1 1e308\n1 2 1e308\n".parse().unwrap();
        assert_eq!(g.arc_weight(0, 1).unwrap(), 1e308);
        assert_eq!(g.path_weight(&[0, 1]).unwrap(), 1e308);
        assert!(g.is_path_valid(&[0, 1]).unwrap());

        // Every pair is a real arc, but the sum leaves the finite range.
        assert_eq!(g.path_weight(&[0, 1, 2]).unwrap(), f64::INFINITY);
        assert!(!g.is_path_valid(&[0, 1, 2]).unwrap());
        assert!(g.does_path_exist(0, 2).unwrap());
    }

    // --- Connectivity ---

    #[test]
    fn test_are_connected() {
        let g = sample();
        assert!(g.are_connected(0, 1).unwrap());
        assert!(!g.are_connected(0, 2).unwrap());
        assert!(!g.are_connected(1, 0).unwrap());
        assert!(g.are_connected(0, 5).is_err());
    }

    #[test]
    fn test_are_connected_ignores_weight_and_multiplicity() {
        let g = graph(2, &[(0, 1, 0.0), (0, 1, -4.0)]);
        assert!(g.are_connected(0, 1).unwrap());
    }

    #[test]
    fn test_does_path_exist_sample() {
        let g = sample();
        assert!(g.does_path_exist(0, 2).unwrap());
        assert!(g.does_path_exist(0, 1).unwrap());
        assert!(!g.does_path_exist(2, 0).unwrap());
    }

    #[test]
    fn test_does_path_exist_chain() {
        let g = make_chain(50, 1.0);
        assert!(g.does_path_exist(0, 49).unwrap());
        assert!(!g.does_path_exist(49, 0).unwrap());
    }

    #[test]
    fn test_does_path_exist_cycle_no_infinite_loop() {
        let g = make_cycle(4);
        assert!(g.does_path_exist(2, 1).unwrap());

        let g = graph(4, &[(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0), (2, 1, 1.0)]);
        assert!(!g.does_path_exist(0, 3).unwrap());
    }

    #[test]
    fn test_does_path_exist_backtracks() {
        // First branch from 0 dead-ends; target only reachable via the second.
        let g = graph(6, &[(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0), (0, 3, 1.0), (3, 4, 1.0), (4, 5, 1.0)]);
        assert!(g.does_path_exist(0, 5).unwrap());
    }

    #[test]
    fn test_does_path_exist_same_vertex() {
        // The start is seeded as visited, so it never matches as a neighbor.
        let g = make_cycle(3);
        assert!(!g.does_path_exist(0, 0).unwrap());

        let g = graph(1, &[(0, 0, 1.0)]);
        assert!(!g.does_path_exist(0, 0).unwrap());
    }

    #[test]
    fn test_does_path_exist_star() {
        let g = make_star(20);
        assert!((1..=20).all(|leaf| g.does_path_exist(0, leaf).unwrap()));
        assert!(!g.does_path_exist(3, 4).unwrap());
    }

    #[test]
    fn test_does_path_exist_out_of_range() {
        let g = sample();
        assert!(g.does_path_exist(0, 3).is_err());
        assert!(g.does_path_exist(3, 0).is_err());
    }

    #[test]
    fn test_does_path_exist_deep_chain() {
        // Deep enough that a recursive search would exhaust the test thread's stack.
        let g = make_chain(200_000, 1.0);
        assert!(g.does_path_exist(0, 199_999).unwrap());
    }

    // --- Idempotence / shared readers ---

    #[test]
    fn test_queries_idempotent() {
        let g: Digraph = "4\n0 1 5\n0 1 2\n1 2 3\n2 3 1\n".parse().unwrap();
        for _ in 0..3 {
            assert_eq!(g.arc_weight(0, 1).unwrap(), 2.0);
            assert_eq!(g.path_weight(&[0, 1, 2, 3]).unwrap(), 6.0);
            assert!(g.does_path_exist(0, 3).unwrap());
            assert!(!g.are_connected(0, 3).unwrap());
        }
    }

    #[test]
    fn test_concurrent_readers() {
        let g = make_chain(1_000, 2.0);
        let path: Vec<usize> = (0..1_000).collect();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert!(g.does_path_exist(0, 999).unwrap());
                    assert_eq!(g.path_weight(&path).unwrap(), 1_998.0);
                });
            }
        });
    }
}
