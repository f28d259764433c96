//! Point-to-point shortest-path solvers.
//!
//! - [`dijkstra`] — Label-setting search with a binary heap, O((E+V) log V)
//! - [`astar`] — Dijkstra guided by a straight-line heuristic
//! - [`bellman_ford`] — Edge relaxation in |V|-1 passes, O(VE)
//! - [`floyd_warshall`] — All-pairs dynamic programming, O(V³)
//!
//! Every solver takes node ids and returns a [`Route`]. An unknown start or
//! end, or an unreachable end, yields [`Route::empty`]. `start == end`
//! yields the trivial single-node route.
//!
//! Dijkstra and A* require non-negative edge distances; this is not checked.
//! Bellman-Ford and Floyd-Warshall tolerate negative edges but do not detect
//! negative cycles. Callers feeding negative weights get an unspecified
//! (but terminating) result.

mod astar;
mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, AllPairs};

use std::cmp::Ordering;

use crate::models::{Graph, Route};

/// Heap entry ordered so that `BinaryHeap` pops the smallest priority first.
/// Ties pop the lower node index first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: f64,
    pub(crate) node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Resolves `start` and `end` to node indices.
fn endpoints(graph: &Graph, start: &str, end: &str) -> Option<(usize, usize)> {
    Some((graph.index_of(start)?, graph.index_of(end)?))
}

/// Follows predecessor edges back from `target` to `source`.
///
/// Gives up after `node_count` hops, which only happens when negative
/// cycles have corrupted the predecessor chain.
fn trace_back(graph: &Graph, source: usize, target: usize, pred: &[Option<usize>]) -> Option<Vec<usize>> {
    let mut edges = Vec::new();
    let mut current = target;
    while current != source {
        if edges.len() >= graph.node_count() {
            log::warn!(
                "predecessor chain from {} does not reach {}; negative cycle?",
                graph.node(target).id(),
                graph.node(source).id()
            );
            return None;
        }
        let e = pred[current]?;
        edges.push(e);
        current = graph.endpoints(e).0;
    }
    edges.reverse();
    Some(edges)
}

/// Converts a predecessor table into a route, or the empty sentinel.
fn route_from_predecessors(
    graph: &Graph,
    source: usize,
    target: usize,
    pred: &[Option<usize>],
) -> Route {
    trace_back(graph, source, target, pred)
        .map_or_else(Route::empty, |edges| Route::from_edges(graph, source, &edges))
}
