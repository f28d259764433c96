//! Raw solver output.

use super::Graph;

/// A path or closed tour produced by a solver, before metrics are derived.
///
/// `nodes` holds node ids in travel order and `edges` the indices of the
/// graph edges traversed between consecutive nodes. `distance` and `time`
/// are the left-to-right sums of those edges' weights. An empty route is the
/// "no feasible path/tour" sentinel.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node, Route};
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
///     vec![Edge::new("A", "B", 120.0, 30.0)],
/// )
/// .unwrap();
///
/// let route = Route::from_edges(&g, 0, &[0]);
/// assert_eq!(route.nodes(), ["A", "B"]);
/// assert_eq!(route.distance(), 120.0);
/// assert_eq!(route.time(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    nodes: Vec<String>,
    edges: Vec<usize>,
    distance: f64,
    time: f64,
}

impl Route {
    /// The infeasible sentinel: no nodes, zero distance and time.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A route that stays at `start` without moving.
    pub fn trivial(graph: &Graph, start: usize) -> Self {
        Self::from_edges(graph, start, &[])
    }

    /// Builds a route that starts at node `start` and follows `edges`.
    ///
    /// The edges are assumed to be contiguous: each edge starts where the
    /// previous one ended.
    pub fn from_edges(graph: &Graph, start: usize, edges: &[usize]) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(graph.node(start).id().to_string());
        let mut distance = 0.0;
        let mut time = 0.0;
        for &e in edges {
            let edge = graph.edge(e);
            distance += edge.distance();
            time += edge.time();
            nodes.push(edge.to().to_string());
        }
        Self {
            nodes,
            edges: edges.to_vec(),
            distance,
            time,
        }
    }

    /// Node ids in travel order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Indices of traversed edges.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Total distance in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total travel time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns `true` for the infeasible sentinel.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Traffic factors of the traversed edges, in travel order.
    pub fn traffic_factors(&self, graph: &Graph) -> Vec<f64> {
        self.edges
            .iter()
            .map(|&e| graph.edge(e).traffic_factor())
            .collect()
    }

    /// Consumes the route, returning its node ids.
    pub fn into_nodes(self) -> Vec<String> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::square_graph;

    #[test]
    fn test_route_empty() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert!(r.edges().is_empty());
        assert_eq!(r.distance(), 0.0);
        assert_eq!(r.time(), 0.0);
    }

    #[test]
    fn test_route_trivial() {
        let g = square_graph();
        let r = Route::trivial(&g, 2);
        assert!(!r.is_empty());
        assert_eq!(r.nodes(), ["C"]);
        assert_eq!(r.distance(), 0.0);
    }

    #[test]
    fn test_route_from_edges_sums() {
        let g = square_graph();
        let ab = g.edge_between(0, 1).expect("A→B");
        let bd = g.edge_between(1, 3).expect("B→D");
        let r = Route::from_edges(&g, 0, &[ab, bd]);
        assert_eq!(r.nodes(), ["A", "B", "D"]);
        assert!((r.distance() - 25.0).abs() < 1e-10);
        assert!((r.time() - 150.0).abs() < 1e-10);
        assert_eq!(r.traffic_factors(&g), vec![1.0, 1.0]);
    }
}
