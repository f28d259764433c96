//! A* search with a straight-line heuristic.
//!
//! # Algorithm
//!
//! Same relaxation as Dijkstra, but the frontier is ordered by `g + h`, where
//! `g` is the distance travelled so far and `h` the
//! [`heuristic_distance`] from a node to the goal. Nodes may be reopened when
//! a cheaper `g` is found, so the result is optimal for any admissible
//! heuristic, consistent or not.
//!
//! # Limitations
//!
//! The heuristic converts coordinate degrees with a fixed 111 km/degree
//! factor. It can overestimate on graphs whose edge distances are shorter
//! than that planar estimate (for example far from the equator), in which
//! case the returned path may be suboptimal.
//!
//! # Reference
//!
//! Hart, P.E., Nilsson, N.J. & Raphael, B. (1968). "A Formal Basis for the
//! Heuristic Determination of Minimum Cost Paths", *IEEE Transactions on
//! Systems Science and Cybernetics* 4(2), 100-107.

use std::collections::BinaryHeap;

use super::{endpoints, route_from_predecessors, FrontierEntry};
use crate::distance::heuristic_distance;
use crate::models::{Graph, Route};

/// Finds a shortest path from `start` to `end` guided by node coordinates.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::shortest_path::astar;
///
/// let g = Graph::from_parts(
///     vec![
///         Node::new("A", 0.0, 0.0),
///         Node::new("B", 0.0, 0.001),
///         Node::new("C", 0.0, 0.002),
///     ],
///     vec![
///         Edge::new("A", "B", 120.0, 10.0),
///         Edge::new("B", "C", 120.0, 10.0),
///         Edge::new("A", "C", 300.0, 20.0),
///     ],
/// )
/// .unwrap();
///
/// let route = astar(&g, "A", "C");
/// assert_eq!(route.nodes(), ["A", "B", "C"]);
/// assert_eq!(route.distance(), 240.0);
/// ```
pub fn astar(graph: &Graph, start: &str, end: &str) -> Route {
    let Some((source, target)) = endpoints(graph, start, end) else {
        return Route::empty();
    };

    let n = graph.node_count();
    let goal = graph.node(target);
    let h: Vec<f64> = graph
        .nodes()
        .iter()
        .map(|node| heuristic_distance(node, goal))
        .collect();

    let mut g = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut found = false;

    g[source] = 0.0;
    heap.push(FrontierEntry {
        priority: h[source],
        node: source,
    });

    while let Some(FrontierEntry { priority, node }) = heap.pop() {
        // stale entry
        if priority > g[node] + h[node] {
            continue;
        }
        if node == target {
            found = true;
            break;
        }

        for (e, to, edge) in graph.outgoing(node) {
            let candidate = g[node] + edge.distance();
            if candidate < g[to] {
                g[to] = candidate;
                pred[to] = Some(e);
                heap.push(FrontierEntry {
                    priority: candidate + h[to],
                    node: to,
                });
            }
        }
    }

    if !found {
        return Route::empty();
    }
    route_from_predecessors(graph, source, target, &pred)
}
