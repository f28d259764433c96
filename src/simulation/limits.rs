//! Node-count ceilings and search-space estimates for the exact solvers.

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::error::SimulationError;
use crate::tour::{BRANCH_AND_BOUND_MAX_NODES, HELD_KARP_MAX_NODES};

/// Largest graph each exponential tour solver may be run on.
///
/// The simulator checks these before dispatch and rejects oversized
/// requests with [`SimulationError::TooManyNodes`] instead of running a
/// truncated search. Ceilings above a solver's own hard maximum are
/// clamped to it.
///
/// # Examples
///
/// ```
/// use u_routesim::simulation::{Algorithm, SolverLimits};
///
/// let limits = SolverLimits::default().with_brute_force(8);
/// assert_eq!(limits.limit_for(Algorithm::BruteForce), Some(8));
/// assert_eq!(limits.limit_for(Algorithm::Dijkstra), None);
/// assert!(limits.check(Algorithm::BruteForce, 9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverLimits {
    brute_force: usize,
    held_karp: usize,
    branch_and_bound: usize,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            brute_force: 10,
            held_karp: 16,
            branch_and_bound: 20,
        }
    }
}

impl SolverLimits {
    /// Sets the brute-force ceiling.
    pub fn with_brute_force(mut self, nodes: usize) -> Self {
        self.brute_force = nodes;
        self
    }

    /// Sets the Held-Karp ceiling, clamped to [`HELD_KARP_MAX_NODES`].
    pub fn with_held_karp(mut self, nodes: usize) -> Self {
        self.held_karp = nodes.min(HELD_KARP_MAX_NODES);
        self
    }

    /// Sets the branch-and-bound ceiling, clamped to
    /// [`BRANCH_AND_BOUND_MAX_NODES`].
    pub fn with_branch_and_bound(mut self, nodes: usize) -> Self {
        self.branch_and_bound = nodes.min(BRANCH_AND_BOUND_MAX_NODES);
        self
    }

    /// Ceiling for `algorithm`, `None` for polynomial algorithms.
    pub fn limit_for(&self, algorithm: Algorithm) -> Option<usize> {
        match algorithm {
            Algorithm::BruteForce => Some(self.brute_force),
            Algorithm::HeldKarp => Some(self.held_karp.min(HELD_KARP_MAX_NODES)),
            Algorithm::BranchAndBound => {
                Some(self.branch_and_bound.min(BRANCH_AND_BOUND_MAX_NODES))
            }
            Algorithm::Dijkstra
            | Algorithm::AStar
            | Algorithm::BellmanFord
            | Algorithm::FloydWarshall
            | Algorithm::NearestNeighbor => None,
        }
    }

    /// Fails if `nodes` exceeds the ceiling for `algorithm`.
    pub fn check(&self, algorithm: Algorithm, nodes: usize) -> Result<(), SimulationError> {
        match self.limit_for(algorithm) {
            Some(limit) if nodes > limit => Err(SimulationError::TooManyNodes {
                algorithm,
                nodes,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Rough count of elementary steps `algorithm` performs on a graph with
/// `nodes` nodes and `edges` edges.
///
/// Meant for callers deciding whether a request is affordable before
/// submitting it; the figure is an upper-bound order of magnitude, not a
/// prediction.
///
/// | Algorithm | Estimate |
/// |---|---|
/// | Dijkstra, A* | (E + V) · log₂ V |
/// | Bellman-Ford | V · E |
/// | Floyd-Warshall | V³ |
/// | Brute force | (V − 1)! |
/// | Held-Karp | V² · 2^V |
/// | Branch-and-bound | V · 2^V |
/// | Nearest neighbor | V² |
///
/// # Examples
///
/// ```
/// use u_routesim::simulation::{search_space, Algorithm};
///
/// assert_eq!(search_space(Algorithm::BruteForce, 5, 20), 24.0);
/// assert_eq!(search_space(Algorithm::HeldKarp, 4, 12), 256.0);
/// ```
pub fn search_space(algorithm: Algorithm, nodes: usize, edges: usize) -> f64 {
    let v = nodes as f64;
    let e = edges as f64;
    match algorithm {
        Algorithm::Dijkstra | Algorithm::AStar => (e + v) * v.max(2.0).log2(),
        Algorithm::BellmanFord => v * e,
        Algorithm::FloydWarshall => v * v * v,
        Algorithm::BruteForce => (1..nodes).map(|k| k as f64).product(),
        Algorithm::HeldKarp => v * v * v.exp2(),
        Algorithm::BranchAndBound => v * v.exp2(),
        Algorithm::NearestNeighbor => v * v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let l = SolverLimits::default();
        assert_eq!(l.limit_for(Algorithm::BruteForce), Some(10));
        assert_eq!(l.limit_for(Algorithm::HeldKarp), Some(16));
        assert_eq!(l.limit_for(Algorithm::BranchAndBound), Some(20));
        assert_eq!(l.limit_for(Algorithm::NearestNeighbor), None);
    }

    #[test]
    fn test_check_boundary() {
        let l = SolverLimits::default();
        assert!(l.check(Algorithm::BruteForce, 10).is_ok());
        assert_eq!(
            l.check(Algorithm::BruteForce, 11),
            Err(SimulationError::TooManyNodes {
                algorithm: Algorithm::BruteForce,
                nodes: 11,
                limit: 10,
            })
        );
        assert!(l.check(Algorithm::FloydWarshall, 10_000).is_ok());
    }

    #[test]
    fn test_hard_caps() {
        let l = SolverLimits::default()
            .with_held_karp(1_000)
            .with_branch_and_bound(1_000);
        assert_eq!(l.limit_for(Algorithm::HeldKarp), Some(HELD_KARP_MAX_NODES));
        assert_eq!(
            l.limit_for(Algorithm::BranchAndBound),
            Some(BRANCH_AND_BOUND_MAX_NODES)
        );
    }

    #[test]
    fn test_search_space() {
        assert_eq!(search_space(Algorithm::BruteForce, 1, 0), 1.0);
        assert_eq!(search_space(Algorithm::BruteForce, 10, 90), 362_880.0);
        assert_eq!(search_space(Algorithm::FloydWarshall, 10, 0), 1_000.0);
        assert_eq!(search_space(Algorithm::BellmanFord, 10, 30), 300.0);
        assert_eq!(search_space(Algorithm::BranchAndBound, 3, 6), 24.0);
        assert!(search_space(Algorithm::HeldKarp, 16, 0) < search_space(Algorithm::BruteForce, 16, 0));
    }
}
