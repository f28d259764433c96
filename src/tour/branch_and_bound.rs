//! Best-first branch-and-bound for the TSP.
//!
//! # Algorithm
//!
//! Partial tours sit in a priority queue ordered by `cost + bound`, where
//! `bound` is an optimistic estimate of the remaining cost: for every
//! unvisited node, its cheapest outgoing edge to another unvisited node or
//! back to the start. Each unvisited node must be left exactly once along
//! one of those edges, so the bound never overestimates (for non-negative
//! distances).
//!
//! Completing the last hop closes the tour through the direct edge to the
//! start and updates the incumbent. Children whose `cost + bound` is not
//! below the incumbent are discarded, and the search stops once the best
//! queued state cannot beat it.
//!
//! Queue ties go to the deeper partial tour, then to the earlier insertion,
//! so runs are reproducible.
//!
//! # Complexity
//!
//! Exponential in the worst case (O(n!) expansions), typically far fewer.
//! The visited set is a `u64` bitmask, see [`BRANCH_AND_BOUND_MAX_NODES`].
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W. & Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::closed_route;
use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// Largest graph [`branch_and_bound`] accepts.
pub const BRANCH_AND_BOUND_MAX_NODES: usize = 64;

#[derive(Debug, Clone)]
struct PartialTour {
    estimate: f64,
    cost: f64,
    sequence: u64,
    path: Vec<usize>,
    visited: u64,
}

impl PartialEq for PartialTour {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PartialTour {}

impl PartialOrd for PartialTour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PartialTour {
    // BinaryHeap is a max-heap: "greater" pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| self.path.len().cmp(&other.path.len()))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Sum over unvisited nodes of their cheapest edge to another unvisited node
/// or to `start`. Infinite if some unvisited node has no such edge.
fn lower_bound(matrix: &CostMatrix, start: usize, visited: u64) -> f64 {
    let n = matrix.size();
    let mut bound = 0.0;
    for u in 0..n {
        if visited & (1 << u) != 0 {
            continue;
        }
        let cheapest = (0..n)
            .filter(|&v| v != u && (v == start || visited & (1 << v) == 0))
            .filter(|&v| matrix.has_edge(u, v))
            .map(|v| matrix.get(u, v))
            .min_by(f64::total_cmp);
        match cheapest {
            Some(d) => bound += d,
            None => return f64::INFINITY,
        }
    }
    bound
}

/// Finds a minimum-distance closed tour by best-first branch-and-bound.
///
/// # Panics
///
/// Panics if the graph has more than [`BRANCH_AND_BOUND_MAX_NODES`] nodes.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::tour::branch_and_bound;
///
/// let mut g = Graph::from_parts(
///     ["A", "B", "C", "D"].map(|id| Node::new(id, 0.0, 0.0)),
///     Vec::new(),
/// )
/// .unwrap();
/// for (a, b, d) in [("A", "B", 10.0), ("B", "C", 10.0), ("C", "D", 10.0),
///                   ("D", "A", 10.0), ("A", "C", 15.0), ("B", "D", 15.0)] {
///     g.add_bidirectional_edge(Edge::new(a, b, d, d)).unwrap();
/// }
///
/// let tour = branch_and_bound(&g, "A");
/// assert_eq!(tour.distance(), 40.0);
/// ```
pub fn branch_and_bound(graph: &Graph, start: &str) -> Route {
    let Some(s) = graph.index_of(start) else {
        return Route::empty();
    };
    let n = graph.node_count();
    assert!(
        n <= BRANCH_AND_BOUND_MAX_NODES,
        "branch_and_bound supports at most {BRANCH_AND_BOUND_MAX_NODES} nodes, got {n}"
    );
    if n == 1 {
        return Route::trivial(graph, s);
    }

    let matrix = CostMatrix::from_graph(graph);
    let mut incumbent = f64::INFINITY;
    let mut best_path: Option<Vec<usize>> = None;
    let mut inserted: u64 = 0;
    let mut expanded: u64 = 0;
    let mut heap = BinaryHeap::new();

    let root_visited = 1u64 << s;
    heap.push(PartialTour {
        estimate: lower_bound(&matrix, s, root_visited),
        cost: 0.0,
        sequence: inserted,
        path: vec![s],
        visited: root_visited,
    });

    while let Some(state) = heap.pop() {
        if state.estimate >= incumbent {
            break;
        }
        expanded += 1;
        let current = *state.path.last().unwrap_or(&s);

        for next in 0..n {
            if state.visited & (1 << next) != 0 || !matrix.has_edge(current, next) {
                continue;
            }
            let cost = state.cost + matrix.get(current, next);
            let visited = state.visited | (1 << next);

            if state.path.len() + 1 == n {
                if !matrix.has_edge(next, s) {
                    continue;
                }
                let total = cost + matrix.get(next, s);
                if total < incumbent {
                    incumbent = total;
                    let mut path = state.path.clone();
                    path.push(next);
                    path.push(s);
                    best_path = Some(path);
                }
                continue;
            }

            let estimate = cost + lower_bound(&matrix, s, visited);
            if estimate >= incumbent {
                continue;
            }
            inserted += 1;
            let mut path = state.path.clone();
            path.push(next);
            heap.push(PartialTour {
                estimate,
                cost,
                sequence: inserted,
                path,
                visited,
            });
        }
    }

    log::debug!("branch_and_bound expanded {expanded} states, queued {inserted}");
    best_path.map_or_else(Route::empty, |path| closed_route(graph, &matrix, &path))
}
