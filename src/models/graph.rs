//! Immutable weighted directed graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Edge, Node};
use crate::error::GraphError;

/// A directed road graph stored as an index arena.
///
/// Nodes are addressed by a dense `usize` index (insertion order) and by
/// their string id. Each node keeps the indices of its outgoing edges in
/// insertion order, so iteration order is deterministic. Solvers only read
/// the graph; per-run state (distance tables, visited sets) is owned by the
/// solver call.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
///
/// let mut g = Graph::new();
/// g.add_node(Node::new("A", 0.0, 0.0)).unwrap();
/// g.add_node(Node::new("B", 0.0, 0.001)).unwrap();
/// g.add_bidirectional_edge(Edge::new("A", "B", 111.0, 10.0)).unwrap();
///
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2);
/// assert!(g.edge_between_ids("B", "A").is_some());
/// assert!(g.edge_between_ids("A", "C").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    endpoints: Vec<(usize, usize)>,
    outgoing: Vec<Vec<usize>>,
}

/// Serialized shape of a graph: plain node and edge lists.
#[derive(Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = GraphError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        Self::from_parts(data.nodes, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from node and edge lists.
    ///
    /// Fails on duplicate node ids or edges whose endpoints are not nodes.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Parses a graph from its JSON form `{"nodes": [...], "edges": [...]}`.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a node and returns its index.
    pub fn add_node(&mut self, node: Node) -> Result<usize, GraphError> {
        if self.index.contains_key(node.id()) {
            return Err(GraphError::DuplicateNode(node.id().to_string()));
        }
        let idx = self.nodes.len();
        self.index.insert(node.id().to_string(), idx);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        Ok(idx)
    }

    /// Adds a directed edge and returns its index.
    pub fn add_edge(&mut self, edge: Edge) -> Result<usize, GraphError> {
        let from = self.resolve(&edge, edge.from())?;
        let to = self.resolve(&edge, edge.to())?;
        let idx = self.edges.len();
        self.edges.push(edge);
        self.endpoints.push((from, to));
        self.outgoing[from].push(idx);
        Ok(idx)
    }

    /// Adds `edge` and its reverse.
    pub fn add_bidirectional_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let reverse = edge.reversed();
        self.add_edge(edge)?;
        self.add_edge(reverse)?;
        Ok(())
    }

    fn resolve(&self, edge: &Edge, id: &str) -> Result<usize, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownEndpoint {
                from: edge.from().to_string(),
                to: edge.to().to_string(),
                missing: id.to_string(),
            })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Edge at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn edge(&self, idx: usize) -> &Edge {
        &self.edges[idx]
    }

    /// Index of the node with the given id, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node with the given id, if present.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|idx| &self.nodes[idx])
    }

    /// `(from, to)` node indices of edge `idx`.
    pub fn endpoints(&self, idx: usize) -> (usize, usize) {
        self.endpoints[idx]
    }

    /// Outgoing edges of node `idx` as `(edge index, destination index, edge)`.
    pub fn outgoing(&self, idx: usize) -> impl Iterator<Item = (usize, usize, &Edge)> + '_ {
        self.outgoing[idx]
            .iter()
            .map(move |&e| (e, self.endpoints[e].1, &self.edges[e]))
    }

    /// Cheapest direct edge (by distance) from `from` to `to`, if any.
    ///
    /// Parallel edges are resolved to the shortest one; ties keep the edge
    /// inserted first.
    pub fn edge_between(&self, from: usize, to: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (e, dest, edge) in self.outgoing(from) {
            if dest != to {
                continue;
            }
            match best {
                Some(b) if self.edges[b].distance() <= edge.distance() => {}
                _ => best = Some(e),
            }
        }
        best
    }

    /// Cheapest direct edge between two node ids, or `None` if either id is
    /// unknown or no edge exists.
    pub fn edge_between_ids(&self, from: &str, to: &str) -> Option<&Edge> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.edge_between(from, to).map(|e| &self.edges[e])
    }
}

/// Four-node square used across the crate's tests:
/// `A→B=10, B→C=10, C→D=10, D→A=10, A→C=15, B→D=15`, all bidirectional.
#[cfg(test)]
pub(crate) fn square_graph() -> Graph {
    let nodes = vec![
        Node::new("A", 0.0, 0.0),
        Node::new("B", 0.0, 0.00009),
        Node::new("C", 0.00009, 0.00009),
        Node::new("D", 0.00009, 0.0),
    ];
    let mut g = Graph::from_parts(nodes, Vec::new()).expect("unique ids");
    for (from, to, d) in [
        ("A", "B", 10.0),
        ("B", "C", 10.0),
        ("C", "D", 10.0),
        ("D", "A", 10.0),
        ("A", "C", 15.0),
        ("B", "D", 15.0),
    ] {
        g.add_bidirectional_edge(Edge::new(from, to, d, d * 6.0))
            .expect("known endpoints");
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_shape() {
        let g = square_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 12);
        assert_eq!(g.index_of("C"), Some(2));
        assert_eq!(g.node_by_id("D").map(|n| n.lat()), Some(0.00009));
    }

    #[test]
    fn test_duplicate_node() {
        let mut g = Graph::new();
        g.add_node(Node::new("A", 0.0, 0.0)).expect("first insert");
        let err = g.add_node(Node::new("A", 1.0, 1.0)).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("A".into()));
    }

    #[test]
    fn test_unknown_endpoint() {
        let mut g = Graph::new();
        g.add_node(Node::new("A", 0.0, 0.0)).expect("insert");
        let err = g.add_edge(Edge::new("A", "Z", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownEndpoint { missing, .. } if missing == "Z"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_outgoing_order() {
        let g = square_graph();
        let a = g.index_of("A").expect("A");
        let dests: Vec<&str> = g.outgoing(a).map(|(_, d, _)| g.node(d).id()).collect();
        // A→B, A→D (reverse of D→A), A→C in insertion order
        assert_eq!(dests, vec!["B", "D", "C"]);
    }

    #[test]
    fn test_edge_between_prefers_cheapest() {
        let mut g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            vec![Edge::new("A", "B", 20.0, 1.0), Edge::new("A", "B", 5.0, 9.0)],
        )
        .expect("valid");
        let e = g.edge_between(0, 1).expect("edge");
        assert_eq!(g.edge(e).distance(), 5.0);
        assert!(g.edge_between(1, 0).is_none());
        g.add_edge(Edge::new("B", "A", 1.0, 1.0)).expect("valid");
        assert!(g.edge_between(1, 0).is_some());
    }

    #[test]
    fn test_endpoints() {
        let g = square_graph();
        let e = g.edge_between(1, 3).expect("B→D");
        assert_eq!(g.endpoints(e), (1, 3));
        assert_eq!(g.edge(e).distance(), 15.0);
    }
}
