//! Floyd-Warshall all-pairs shortest paths.
//!
//! # Algorithm
//!
//! Starts from the direct-edge matrix (zero diagonal, `+∞` where no edge)
//! and a successor matrix with `next[i][j] = j` for every edge. For each
//! intermediate `k`, any pair `(i, j)` that gets cheaper through `k` takes
//! `dist[i][k] + dist[k][j]` and `next[i][j] = next[i][k]`.
//!
//! # Complexity
//!
//! O(V³) time, O(V²) space.
//!
//! # Reference
//!
//! Floyd, R.W. (1962). "Algorithm 97: Shortest path", *Communications of the
//! ACM* 5(6), 345.

use super::endpoints;
use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// All-pairs distance and successor tables.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::shortest_path::AllPairs;
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0), Node::new("C", 0.0, 0.0)],
///     vec![Edge::new("A", "B", 2.0, 1.0), Edge::new("B", "C", 3.0, 1.0)],
/// )
/// .unwrap();
///
/// let ap = AllPairs::compute(&g);
/// assert_eq!(ap.distance(0, 2), Some(5.0));
/// assert_eq!(ap.distance(2, 0), None);
/// assert_eq!(ap.path(0, 2), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct AllPairs {
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
    size: usize,
}

impl AllPairs {
    /// Runs Floyd-Warshall over the whole graph.
    pub fn compute(graph: &Graph) -> Self {
        let matrix = CostMatrix::from_graph(graph);
        let n = matrix.size();
        let mut dist = vec![f64::INFINITY; n * n];
        let mut next = vec![None; n * n];

        for i in 0..n {
            for j in 0..n {
                dist[i * n + j] = matrix.get(i, j);
                if matrix.has_edge(i, j) {
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = dist[i * n + k];
                if ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through = ik + dist[k * n + j];
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self { dist, next, size: n }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest distance from `from` to `to`, `None` if unreachable.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        let d = self.dist[from * self.size + to];
        d.is_finite().then_some(d)
    }

    /// Node indices of a shortest path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable, or if the successor walk does
    /// not reach `to` within `size` hops (only possible with negative cycles).
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from == to {
            return Some(vec![from]);
        }
        self.distance(from, to)?;
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            if path.len() > self.size {
                log::warn!("successor walk {from} -> {to} did not terminate; negative cycle?");
                return None;
            }
            current = self.next[current * self.size + to]?;
            path.push(current);
        }
        Some(path)
    }
}

/// Finds the shortest path from `start` to `end` via the all-pairs table.
///
/// Only the `(start, end)` entry is surfaced; use [`AllPairs`] directly to
/// query other pairs without recomputing.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::shortest_path::floyd_warshall;
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0), Node::new("C", 0.0, 0.0)],
///     vec![
///         Edge::new("A", "B", 1.0, 1.0),
///         Edge::new("B", "C", 1.0, 1.0),
///         Edge::new("A", "C", 3.0, 1.0),
///     ],
/// )
/// .unwrap();
///
/// let route = floyd_warshall(&g, "A", "C");
/// assert_eq!(route.nodes(), ["A", "B", "C"]);
/// assert_eq!(route.distance(), 2.0);
/// ```
pub fn floyd_warshall(graph: &Graph, start: &str, end: &str) -> Route {
    let Some((source, target)) = endpoints(graph, start, end) else {
        return Route::empty();
    };

    let table = AllPairs::compute(graph);
    let Some(path) = table.path(source, target) else {
        return Route::empty();
    };
    CostMatrix::from_graph(graph)
        .edges_along(&path)
        .map_or_else(Route::empty, |edges| Route::from_edges(graph, source, &edges))
}
