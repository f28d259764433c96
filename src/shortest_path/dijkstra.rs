//! Dijkstra's shortest-path algorithm.
//!
//! # Algorithm
//!
//! Keeps a tentative distance per node (`+∞` except the start) and a
//! predecessor edge. Repeatedly settles the unsettled node with the smallest
//! tentative distance and relaxes its outgoing edges. Stops as soon as the
//! end node is settled or the frontier is exhausted.
//!
//! # Complexity
//!
//! O((E + V) log V) with a binary heap.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::collections::BinaryHeap;

use super::{endpoints, route_from_predecessors, FrontierEntry};
use crate::models::{Graph, Route};

/// Finds the shortest path from `start` to `end` by edge distance.
///
/// Requires non-negative edge distances (not checked).
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::shortest_path::dijkstra;
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0), Node::new("C", 0.0, 0.0)],
///     vec![
///         Edge::new("A", "B", 4.0, 1.0),
///         Edge::new("B", "C", 4.0, 1.0),
///         Edge::new("A", "C", 10.0, 1.0),
///     ],
/// )
/// .unwrap();
///
/// let route = dijkstra(&g, "A", "C");
/// assert_eq!(route.nodes(), ["A", "B", "C"]);
/// assert_eq!(route.distance(), 8.0);
/// ```
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Route {
    let Some((source, target)) = endpoints(graph, start, end) else {
        return Route::empty();
    };

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(FrontierEntry {
        priority: 0.0,
        node: source,
    });

    while let Some(FrontierEntry { node, .. }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }

        for (e, to, edge) in graph.outgoing(node) {
            if settled[to] {
                continue;
            }
            let candidate = dist[node] + edge.distance();
            if candidate < dist[to] {
                dist[to] = candidate;
                pred[to] = Some(e);
                heap.push(FrontierEntry {
                    priority: candidate,
                    node: to,
                });
            }
        }
    }

    if !settled[target] {
        return Route::empty();
    }
    route_from_predecessors(graph, source, target, &pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::square_graph;
    use crate::models::{Edge, Node};

    #[test]
    fn test_direct_edge_beats_detour() {
        let g = square_graph();
        let r = dijkstra(&g, "A", "C");
        assert_eq!(r.nodes(), ["A", "C"]);
        assert!((r.distance() - 15.0).abs() < 1e-10);
        assert!((r.time() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_adjacent() {
        let g = square_graph();
        let r = dijkstra(&g, "B", "C");
        assert_eq!(r.nodes(), ["B", "C"]);
        assert_eq!(r.distance(), 10.0);
    }

    #[test]
    fn test_unknown_node() {
        let g = square_graph();
        assert!(dijkstra(&g, "A", "Z").is_empty());
        assert!(dijkstra(&g, "Z", "A").is_empty());
    }

    #[test]
    fn test_unreachable() {
        let g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            vec![Edge::new("B", "A", 1.0, 1.0)],
        )
        .expect("valid");
        let r = dijkstra(&g, "A", "B");
        assert!(r.is_empty());
        assert_eq!(r.distance(), 0.0);
        assert_eq!(r.time(), 0.0);
    }

    #[test]
    fn test_same_start_end_is_trivial() {
        let g = square_graph();
        let r = dijkstra(&g, "B", "B");
        assert_eq!(r.nodes(), ["B"]);
        assert_eq!(r.distance(), 0.0);
    }

    #[test]
    fn test_respects_direction() {
        let g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0), Node::new("C", 0.0, 0.0)],
            vec![
                Edge::new("A", "B", 1.0, 1.0),
                Edge::new("C", "B", 1.0, 1.0),
                Edge::new("A", "C", 5.0, 1.0),
            ],
        )
        .expect("valid");
        let r = dijkstra(&g, "A", "C");
        assert_eq!(r.nodes(), ["A", "C"]);
        assert_eq!(r.distance(), 5.0);
    }
}
