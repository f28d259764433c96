//! Dense cost matrix over graph nodes.

use crate::models::Graph;

/// A dense n×n matrix of cheapest direct-edge distances, row-major.
///
/// Absent edges are `f64::INFINITY`; the diagonal is zero. Alongside each
/// finite entry the matrix remembers which graph edge it came from, so tour
/// solvers can rebuild the traversed edge list.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::distance::CostMatrix;
///
/// let g = Graph::from_parts(
///     vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
///     vec![Edge::new("A", "B", 7.0, 1.0)],
/// )
/// .unwrap();
/// let cm = CostMatrix::from_graph(&g);
/// assert_eq!(cm.get(0, 1), 7.0);
/// assert!(cm.get(1, 0).is_infinite());
/// assert_eq!(cm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    edges: Vec<Option<usize>>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with no edges (zero diagonal,
    /// infinity elsewhere).
    pub fn new(size: usize) -> Self {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self {
            data,
            edges: vec![None; size * size],
            size,
        }
    }

    /// Builds the matrix from a graph, keeping the shortest of any parallel
    /// edges.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut cm = Self::new(graph.node_count());
        for (e, edge) in graph.edges().iter().enumerate() {
            let (from, to) = graph.endpoints(e);
            if from == to {
                continue;
            }
            if edge.distance() < cm.get(from, to) {
                cm.set(from, to, edge.distance(), e);
            }
        }
        cm
    }

    /// Distance from `from` to `to`, `f64::INFINITY` if there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Graph edge index behind the `(from, to)` entry, if any.
    pub fn edge(&self, from: usize, to: usize) -> Option<usize> {
        self.edges[from * self.size + to]
    }

    /// Returns `true` if a direct edge connects `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge(from, to).is_some()
    }

    /// Sets the entry and its source edge.
    pub fn set(&mut self, from: usize, to: usize, distance: f64, edge: usize) {
        self.data[from * self.size + to] = distance;
        self.edges[from * self.size + to] = Some(edge);
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest reachable candidate from `from`.
    ///
    /// Ties keep the earliest candidate. Returns `None` if `candidates` is
    /// empty or none of them has a direct edge from `from`.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            if !self.has_edge(from, c) {
                continue;
            }
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }

    /// Edge indices along a node sequence, or `None` if any hop lacks a
    /// direct edge.
    pub fn edges_along(&self, sequence: &[usize]) -> Option<Vec<usize>> {
        sequence
            .windows(2)
            .map(|w| self.edge(w[0], w[1]))
            .collect()
    }

    /// Total distance along a node sequence (infinite if any hop is missing).
    pub fn sequence_cost(&self, sequence: &[usize]) -> f64 {
        sequence.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::square_graph;
    use crate::models::{Edge, Node};

    #[test]
    fn test_from_graph() {
        let cm = CostMatrix::from_graph(&square_graph());
        assert_eq!(cm.size(), 4);
        assert_eq!(cm.get(0, 1), 10.0);
        assert_eq!(cm.get(0, 2), 15.0);
        assert_eq!(cm.get(3, 3), 0.0);
        assert!(cm.edge(3, 3).is_none());
    }

    #[test]
    fn test_missing_edge_is_infinite() {
        let g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            vec![Edge::new("A", "B", 3.0, 1.0)],
        )
        .expect("valid");
        let cm = CostMatrix::from_graph(&g);
        assert!(cm.get(1, 0).is_infinite());
        assert!(!cm.has_edge(1, 0));
        assert!(cm.sequence_cost(&[0, 1, 0]).is_infinite());
        assert!(cm.edges_along(&[0, 1, 0]).is_none());
    }

    #[test]
    fn test_parallel_edges_keep_shortest() {
        let g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            vec![Edge::new("A", "B", 9.0, 1.0), Edge::new("A", "B", 4.0, 1.0)],
        )
        .expect("valid");
        let cm = CostMatrix::from_graph(&g);
        assert_eq!(cm.get(0, 1), 4.0);
        assert_eq!(cm.edge(0, 1), Some(1));
    }

    #[test]
    fn test_nearest_neighbor() {
        let cm = CostMatrix::from_graph(&square_graph());
        // From A: B=10, C=15, D=10 → B wins the tie by order
        assert_eq!(cm.nearest_neighbor(0, &[1, 2, 3]), Some(1));
        assert_eq!(cm.nearest_neighbor(0, &[2, 3]), Some(3));
        assert_eq!(cm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_sequence_cost() {
        let cm = CostMatrix::from_graph(&square_graph());
        assert!((cm.sequence_cost(&[0, 1, 2, 3, 0]) - 40.0).abs() < 1e-10);
        assert_eq!(cm.edges_along(&[0, 1, 2]).map(|e| e.len()), Some(2));
    }
}
