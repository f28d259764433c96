//! Exhaustive tour enumeration.
//!
//! # Algorithm
//!
//! Enumerates every ordering of the non-start nodes with Heap's algorithm
//! (iterative form, one swap per permutation), prices each closed tour and
//! keeps the cheapest. Orderings that need a missing edge are discarded.
//! Ties keep the first ordering found.
//!
//! # Complexity
//!
//! O(n · (n-1)!) time, O(n) space. Practical only up to about 10 nodes
//! (9! = 362 880 tours); the default
//! [`SolverLimits`](crate::simulation::SolverLimits) stop at 10.
//!
//! # Reference
//!
//! Heap, B.R. (1963). "Permutations by interchanges", *The Computer Journal*
//! 6(3), 293-294.

use super::{closed_route, others, tour_cost};
use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// Finds a minimum-distance closed tour by trying every ordering.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::tour::brute_force;
///
/// let mut g = Graph::from_parts(
///     ["A", "B", "C"].map(|id| Node::new(id, 0.0, 0.0)),
///     Vec::new(),
/// )
/// .unwrap();
/// g.add_bidirectional_edge(Edge::new("A", "B", 1.0, 1.0)).unwrap();
/// g.add_bidirectional_edge(Edge::new("B", "C", 2.0, 1.0)).unwrap();
/// g.add_bidirectional_edge(Edge::new("C", "A", 3.0, 1.0)).unwrap();
///
/// let tour = brute_force(&g, "A");
/// assert_eq!(tour.nodes(), ["A", "B", "C", "A"]);
/// assert_eq!(tour.distance(), 6.0);
/// ```
pub fn brute_force(graph: &Graph, start: &str) -> Route {
    let Some(s) = graph.index_of(start) else {
        return Route::empty();
    };
    let n = graph.node_count();
    if n == 1 {
        return Route::trivial(graph, s);
    }

    let matrix = CostMatrix::from_graph(graph);
    let mut order = others(n, s);
    let m = order.len();
    let mut best: Option<(f64, Vec<usize>)> = None;

    let mut consider = |order: &[usize]| {
        if let Some(cost) = tour_cost(&matrix, s, order) {
            if best.as_ref().map_or(true, |(b, _)| cost < *b) {
                best = Some((cost, order.to_vec()));
            }
        }
    };

    consider(&order);
    let mut counters = vec![0usize; m];
    let mut i = 1;
    while i < m {
        if counters[i] < i {
            if i % 2 == 0 {
                order.swap(0, i);
            } else {
                order.swap(counters[i], i);
            }
            consider(&order);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    let Some((_, best_order)) = best else {
        return Route::empty();
    };
    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(s);
    sequence.extend(best_order);
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
    fn test_square_optimum() {
        let g = square_graph();
        let r = brute_force(&g, "A");
        assert_valid_tour(&g, &r, "A");
        assert!((r.distance() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_asymmetric_direction() {
        let g = asymmetric_graph();
        let r = brute_force(&g, "0");
        assert_eq!(r.nodes(), ["0", "1", "2", "3", "4", "0"]);
        assert_eq!(r.distance(), 23.0);
    }

    #[test]
    fn test_visits_all_permutations() {
        // Only the ordering 0→3→1→2→0 is feasible; it is the last one a
        // naive lexicographic walk would reach.
        let g = Graph::from_parts(
            (0..4).map(|i| Node::new(i.to_string(), 0.0, 0.0)),
            vec![
                Edge::new("0", "3", 1.0, 1.0),
                Edge::new("3", "1", 1.0, 1.0),
                Edge::new("1", "2", 1.0, 1.0),
                Edge::new("2", "0", 1.0, 1.0),
            ],
        )
        .expect("valid");
        let r = brute_force(&g, "0");
        assert_eq!(r.nodes(), ["0", "3", "1", "2", "0"]);
    }

    #[test]
    fn test_infeasible() {
        let r = brute_force(&dead_end_graph(), "A");
        assert!(r.is_empty());
        assert_eq!(r.distance(), 0.0);
    }

    #[test]
    fn test_single_node() {
        let g = Graph::from_parts(vec![Node::new("solo", 0.0, 0.0)], Vec::new()).expect("valid");
        let r = brute_force(&g, "solo");
        assert_eq!(r.nodes(), ["solo"]);
        assert_eq!(r.distance(), 0.0);
    }

    #[test]
    fn test_two_nodes() {
        let mut g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            Vec::new(),
        )
        .expect("valid");
        g.add_bidirectional_edge(Edge::new("A", "B", 5.0, 2.0))
            .expect("valid");
        let r = brute_force(&g, "B");
        assert_eq!(r.nodes(), ["B", "A", "B"]);
        assert_eq!(r.distance(), 10.0);
        assert_eq!(r.time(), 4.0);
    }

    #[test]
    fn test_unknown_start() {
        assert!(brute_force(&square_graph(), "Z").is_empty());
    }
}
