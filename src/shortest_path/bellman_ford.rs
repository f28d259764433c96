//! Bellman-Ford shortest paths.
//!
//! # Algorithm
//!
//! Relaxes every edge of the graph, in insertion order, `|V| - 1` times.
//! Stops early once a full pass changes nothing. Unlike Dijkstra it handles
//! negative edge distances.
//!
//! The usual extra pass that reports negative cycles is not performed: a
//! graph with a reachable negative cycle produces an unspecified route (the
//! predecessor walk is bounded, so the call still terminates). Negative
//! weights do not occur in road data; callers that construct them own the
//! consequences.
//!
//! # Complexity
//!
//! O(V·E).
//!
//! # Reference
//!
//! Bellman, R. (1958). "On a routing problem", *Quarterly of Applied
//! Mathematics* 16(1), 87-90.

use super::{endpoints, route_from_predecessors};
use crate::models::{Graph, Route};

/// Finds the shortest path from `start` to `end` by repeated edge relaxation.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::shortest_path::bellman_ford;
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0), Node::new("C", 0.0, 0.0)],
///     vec![
///         Edge::new("A", "B", 5.0, 1.0),
///         Edge::new("B", "C", -3.0, 1.0),
///         Edge::new("A", "C", 4.0, 1.0),
///     ],
/// )
/// .unwrap();
///
/// let route = bellman_ford(&g, "A", "C");
/// assert_eq!(route.nodes(), ["A", "B", "C"]);
/// assert_eq!(route.distance(), 2.0);
/// ```
pub fn bellman_ford(graph: &Graph, start: &str, end: &str) -> Route {
    let Some((source, target)) = endpoints(graph, start, end) else {
        return Route::empty();
    };

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    for _ in 1..n {
        let mut changed = false;
        for (e, edge) in graph.edges().iter().enumerate() {
            let (from, to) = graph.endpoints(e);
            if dist[from].is_infinite() {
                continue;
            }
            let candidate = dist[from] + edge.distance();
            if candidate < dist[to] {
                dist[to] = candidate;
                pred[to] = Some(e);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    if dist[target].is_infinite() {
        return Route::empty();
    }
    route_from_predecessors(graph, source, target, &pred)
}
