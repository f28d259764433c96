//! Nearest-neighbor tour heuristic.
//!
//! Builds the tour greedily: from the current node, always move to the
//! closest unvisited node reachable by a direct edge, then close the tour
//! with a direct edge back to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. It is not
//! optimal (typically 15-25% above the optimum on metric instances) and it
//! can paint itself into a corner on sparse graphs, in which case no tour is
//! returned even though one may exist.

use super::closed_route;
use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Distance ties go to the lower node index. If at some step no unvisited
/// node is reachable, or the final node has no edge back to `start`, the
/// result is empty rather than a partial tour.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::tour::nearest_neighbor;
///
/// let mut g = Graph::from_parts(
///     ["D", "N1", "N2", "N3"].map(|id| Node::new(id, 0.0, 0.0)),
///     Vec::new(),
/// )
/// .unwrap();
/// for (a, b, d) in [("D", "N1", 1.0), ("N1", "N2", 1.0), ("N2", "N3", 1.0),
///                   ("D", "N2", 2.0), ("N1", "N3", 2.0), ("D", "N3", 3.0)] {
///     g.add_bidirectional_edge(Edge::new(a, b, d, d)).unwrap();
/// }
///
/// let tour = nearest_neighbor(&g, "D");
/// assert_eq!(tour.nodes(), ["D", "N1", "N2", "N3", "D"]);
/// assert_eq!(tour.distance(), 6.0);
/// ```
pub fn nearest_neighbor(graph: &Graph, start: &str) -> Route {
    let Some(s) = graph.index_of(start) else {
        return Route::empty();
    };
    let n = graph.node_count();
    if n == 1 {
        return Route::trivial(graph, s);
    }

    let matrix = CostMatrix::from_graph(graph);
    let mut visited = vec![false; n];
    visited[s] = true;
    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(s);
    let mut current = s;

    for _ in 1..n {
        let candidates: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
        match matrix.nearest_neighbor(current, &candidates) {
            Some(next) => {
                visited[next] = true;
                sequence.push(next);
                current = next;
            }
            None => {
                log::debug!(
                    "nearest neighbor stuck at {} after {} of {n} nodes",
                    graph.node(current).id(),
                    sequence.len()
                );
                return Route::empty();
            }
        }
    }

    if !matrix.has_edge(current, s) {
        return Route::empty();
    }
    sequence.push(s);
    closed_route(graph, &matrix, &sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::square_graph;
    use crate::models::{Edge, Node};
    use crate::tour::test_support::{assert_valid_tour, asymmetric_graph, dead_end_graph};

    #[test]
    fn test_square() {
        let g = square_graph();
        let r = nearest_neighbor(&g, "A");
        assert_valid_tour(&g, &r, "A");
        // A→B (10, tie with D broken by index) → C → D → A
        assert_eq!(r.nodes(), ["A", "B", "C", "D", "A"]);
        assert!(r.distance() >= 40.0 - 1e-10);
    }

    #[test]
    fn test_chooses_nearest() {
        let mut g = Graph::from_parts(
            ["S", "far", "near"].map(|id| Node::new(id, 0.0, 0.0)),
            Vec::new(),
        )
        .expect("valid");
        g.add_bidirectional_edge(Edge::new("S", "far", 10.0, 1.0))
            .expect("valid");
        g.add_bidirectional_edge(Edge::new("S", "near", 1.0, 1.0))
            .expect("valid");
        g.add_bidirectional_edge(Edge::new("near", "far", 9.0, 1.0))
            .expect("valid");
        let r = nearest_neighbor(&g, "S");
        assert_eq!(r.nodes(), ["S", "near", "far", "S"]);
        assert_eq!(r.distance(), 20.0);
    }

    #[test]
    fn test_greedy_is_suboptimal() {
        // Greedy takes the cheap 1-edges first and pays 50 to get home;
        // the optimum 0→3→2→1→0 costs 2+2+1+2 = 7.
        let g = Graph::from_parts(
            (0..4).map(|i| Node::new(i.to_string(), 0.0, 0.0)),
            vec![
                Edge::new("0", "1", 1.0, 1.0),
                Edge::new("1", "2", 1.0, 1.0),
                Edge::new("2", "3", 1.0, 1.0),
                Edge::new("3", "0", 50.0, 1.0),
                Edge::new("0", "2", 2.0, 1.0),
                Edge::new("2", "1", 1.0, 1.0),
                Edge::new("1", "3", 3.0, 1.0),
                Edge::new("3", "0", 60.0, 1.0),
                Edge::new("1", "0", 2.0, 1.0),
                Edge::new("0", "3", 2.0, 1.0),
                Edge::new("3", "2", 2.0, 1.0),
            ],
        )
        .expect("valid");
        let greedy = nearest_neighbor(&g, "0");
        assert_eq!(greedy.nodes(), ["0", "1", "2", "3", "0"]);
        assert_eq!(greedy.distance(), 53.0);
        let exact = crate::tour::brute_force(&g, "0");
        assert_eq!(exact.nodes(), ["0", "3", "2", "1", "0"]);
        assert_eq!(exact.distance(), 7.0);
    }

    #[test]
    fn test_dead_end_returns_empty() {
        let r = nearest_neighbor(&dead_end_graph(), "A");
        assert!(r.is_empty());
    }

    #[test]
    fn test_stuck_returns_empty() {
        // From A the only unvisited neighbour is B; B has no way on to C.
        let g = Graph::from_parts(
            ["A", "B", "C"].map(|id| Node::new(id, 0.0, 0.0)),
            vec![
                Edge::new("A", "B", 1.0, 1.0),
                Edge::new("B", "A", 1.0, 1.0),
                Edge::new("C", "A", 1.0, 1.0),
                Edge::new("A", "C", 5.0, 1.0),
            ],
        )
        .expect("valid");
        assert!(nearest_neighbor(&g, "A").is_empty());
    }

    #[test]
    fn test_asymmetric() {
        let g = asymmetric_graph();
        let r = nearest_neighbor(&g, "0");
        assert_eq!(r.distance(), 23.0);
    }

    #[test]
    fn test_single_node() {
        let g = Graph::from_parts(vec![Node::new("x", 0.0, 0.0)], Vec::new()).expect("valid");
        assert_eq!(nearest_neighbor(&g, "x").nodes(), ["x"]);
    }
}
