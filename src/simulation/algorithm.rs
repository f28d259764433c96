//! Closed set of solver identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Whether an algorithm answers a point-to-point or a closed-tour query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Shortest path between a start and an end node.
    PointToPoint,
    /// Closed tour over every node from a start node.
    Tour,
}

/// The eight solvers the simulator can dispatch to.
///
/// # Examples
///
/// ```
/// use u_routesim::simulation::{Algorithm, AlgorithmFamily};
///
/// let a: Algorithm = "held-karp".parse().unwrap();
/// assert_eq!(a, Algorithm::HeldKarp);
/// assert_eq!(a.family(), AlgorithmFamily::Tour);
/// assert_eq!("dynamic-programming".parse::<Algorithm>().unwrap(), Algorithm::HeldKarp);
/// assert_eq!(Algorithm::AStar.to_string(), "astar");
/// assert!("simulated-annealing".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Dijkstra's algorithm.
    Dijkstra,
    /// A* search with a straight-line heuristic.
    #[serde(rename = "astar", alias = "a-star")]
    AStar,
    /// Bellman-Ford relaxation.
    BellmanFord,
    /// Floyd-Warshall all-pairs.
    FloydWarshall,
    /// Exhaustive tour enumeration.
    BruteForce,
    /// Held-Karp bitmask dynamic programming.
    #[serde(alias = "dynamic-programming")]
    HeldKarp,
    /// Greedy nearest-neighbor tour.
    NearestNeighbor,
    /// Best-first branch-and-bound tour search.
    BranchAndBound,
}

impl Algorithm {
    /// Every algorithm, point-to-point first.
    pub const ALL: [Self; 8] = [
        Self::Dijkstra,
        Self::AStar,
        Self::BellmanFord,
        Self::FloydWarshall,
        Self::BruteForce,
        Self::HeldKarp,
        Self::NearestNeighbor,
        Self::BranchAndBound,
    ];

    /// Canonical identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::BellmanFord => "bellman-ford",
            Self::FloydWarshall => "floyd-warshall",
            Self::BruteForce => "brute-force",
            Self::HeldKarp => "held-karp",
            Self::NearestNeighbor => "nearest-neighbor",
            Self::BranchAndBound => "branch-and-bound",
        }
    }

    /// Query kind this algorithm answers.
    pub fn family(self) -> AlgorithmFamily {
        match self {
            Self::Dijkstra | Self::AStar | Self::BellmanFord | Self::FloydWarshall => {
                AlgorithmFamily::PointToPoint
            }
            Self::BruteForce | Self::HeldKarp | Self::NearestNeighbor | Self::BranchAndBound => {
                AlgorithmFamily::Tour
            }
        }
    }

    /// Returns `true` if the algorithm guarantees an optimal answer (given
    /// its preconditions).
    pub fn is_exact(self) -> bool {
        !matches!(self, Self::NearestNeighbor)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "a-star" => return Ok(Self::AStar),
            "dynamic-programming" => return Ok(Self::HeldKarp),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|a| a.id() == key)
            .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_ids() {
        for a in Algorithm::ALL {
            assert_eq!(a.id().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_underscores() {
        assert_eq!("Bellman_Ford".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert_eq!(" NEAREST-NEIGHBOR ".parse::<Algorithm>(), Ok(Algorithm::NearestNeighbor));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            "genetic".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm("genetic".into()))
        );
    }

    #[test]
    fn test_families() {
        let tours = Algorithm::ALL
            .iter()
            .filter(|a| a.family() == AlgorithmFamily::Tour)
            .count();
        assert_eq!(tours, 4);
        assert!(!Algorithm::NearestNeighbor.is_exact());
        assert!(Algorithm::BranchAndBound.is_exact());
    }
}
