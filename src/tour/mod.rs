//! Closed-tour (TSP) solvers.
//!
//! - [`brute_force`] — Exhaustive permutation search, O(n!) — exact
//! - [`held_karp`] — Bitmask dynamic programming, O(n²·2ⁿ) — exact
//! - [`nearest_neighbor`] — Greedy nearest unvisited node, O(n²) — heuristic
//! - [`branch_and_bound`] — Best-first search with lower-bound pruning — exact
//!
//! Every solver takes a start node id and returns a [`Route`] that starts and
//! ends at `start` and visits every other node exactly once, following
//! direct edges only. If no such tour exists (a hop or the closing edge is
//! missing) the result is [`Route::empty`], never a partial tour. A
//! single-node graph yields the trivial route `[start]`.
//!
//! The exact solvers are exponential. They do not cap their own search
//! depth; callers must bound the node count before calling them (the
//! [`Simulator`](crate::simulation::Simulator) does so through
//! [`SolverLimits`](crate::simulation::SolverLimits)).

mod branch_and_bound;
mod brute_force;
mod held_karp;
mod nearest_neighbor;

pub use branch_and_bound::{branch_and_bound, BRANCH_AND_BOUND_MAX_NODES};
pub use brute_force::brute_force;
pub use held_karp::{held_karp, HELD_KARP_MAX_NODES};
pub use nearest_neighbor::nearest_neighbor;

use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// Cost of the closed tour `start → order[0] → … → order[last] → start`, or
/// `None` if any hop lacks a direct edge.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::distance::CostMatrix;
/// use u_routesim::tour::tour_cost;
///
/// let mut g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
///     Vec::new(),
/// )
/// .unwrap();
/// g.add_bidirectional_edge(Edge::new("A", "B", 4.0, 1.0)).unwrap();
///
/// let cm = CostMatrix::from_graph(&g);
/// assert_eq!(tour_cost(&cm, 0, &[1]), Some(8.0));
/// ```
pub fn tour_cost(matrix: &CostMatrix, start: usize, order: &[usize]) -> Option<f64> {
    let mut cost = 0.0;
    let mut current = start;
    for &next in order.iter().chain(std::iter::once(&start)) {
        if !matrix.has_edge(current, next) {
            return None;
        }
        cost += matrix.get(current, next);
        current = next;
    }
    Some(cost)
}

/// Builds the route for a closed node sequence (first == last == start).
fn closed_route(graph: &Graph, matrix: &CostMatrix, sequence: &[usize]) -> Route {
    match (sequence.first(), matrix.edges_along(sequence)) {
        (Some(&start), Some(edges)) => Route::from_edges(graph, start, &edges),
        _ => Route::empty(),
    }
}

/// Node indices other than `start`, in index order.
fn others(n: usize, start: usize) -> Vec<usize> {
    (0..n).filter(|&i| i != start).collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Edge, Graph, Node, Route};

    /// Asserts that `route` is a closed tour from `start` covering `graph`.
    pub(crate) fn assert_valid_tour(graph: &Graph, route: &Route, start: &str) {
        let nodes = route.nodes();
        assert_eq!(nodes.first().map(String::as_str), Some(start));
        assert_eq!(nodes.last().map(String::as_str), Some(start));
        assert_eq!(nodes.len(), graph.node_count() + 1);
        let mut inner: Vec<&String> = nodes[1..nodes.len() - 1].iter().collect();
        inner.sort();
        inner.dedup();
        assert_eq!(inner.len(), graph.node_count() - 1);
        assert!(inner.iter().all(|id| id.as_str() != start));
    }

    /// Five-node asymmetric instance with a unique optimum of 23.
    ///
    /// `0→1→2→3→4→0` costs 2+3+4+5+9 = 23; every other direction or order
    /// is more expensive.
    pub(crate) fn asymmetric_graph() -> Graph {
        let nodes = (0..5).map(|i| Node::new(i.to_string(), 0.0, 0.0));
        let mut edges = Vec::new();
        for i in 0..5_usize {
            for j in 0..5_usize {
                if i == j {
                    continue;
                }
                let forward = (j + 5 - i) % 5 == 1;
                let d = if forward {
                    [2.0, 3.0, 4.0, 5.0, 9.0][i]
                } else {
                    20.0 + (i + j) as f64
                };
                edges.push(Edge::new(i.to_string(), j.to_string(), d, d));
            }
        }
        Graph::from_parts(nodes, edges).expect("valid")
    }

    /// Three nodes where `C` cannot be left, so no tour exists.
    pub(crate) fn dead_end_graph() -> Graph {
        Graph::from_parts(
            vec![
                Node::new("A", 0.0, 0.0),
                Node::new("B", 0.0, 0.0),
                Node::new("C", 0.0, 0.0),
            ],
            vec![
                Edge::new("A", "B", 1.0, 1.0),
                Edge::new("B", "A", 1.0, 1.0),
                Edge::new("B", "C", 1.0, 1.0),
                Edge::new("A", "C", 1.0, 1.0),
            ],
        )
        .expect("valid")
    }
}
