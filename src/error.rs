//! Error types for graph construction and simulation requests.
//!
//! Infeasibility (no path or no tour) is not an error: solvers return an
//! empty [`Route`](crate::models::Route) and the simulator reports zero metrics.

use thiserror::Error;

use crate::simulation::Algorithm;

/// Errors raised while building a [`Graph`](crate::models::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id already exists.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
    /// An edge refers to a node id that is not in the graph.
    #[error("edge {from} -> {to} references unknown node `{missing}`")]
    UnknownEndpoint {
        /// Edge origin.
        from: String,
        /// Edge destination.
        to: String,
        /// The endpoint that could not be resolved.
        missing: String,
    },
}

/// Errors returned by [`Simulator`](crate::simulation::Simulator) before any
/// solver runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The requested start or end location is not a node of the graph.
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    /// A point-to-point algorithm was requested without an end location.
    #[error("{0} requires an end location")]
    MissingEnd(Algorithm),
    /// Start and end are the same node in point-to-point mode.
    #[error("start and end must differ (both are `{0}`)")]
    SameStartEnd(String),
    /// The algorithm identifier did not match any known algorithm.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// The graph is larger than the configured ceiling for an exponential
    /// algorithm.
    #[error("{algorithm} is limited to {limit} nodes, graph has {nodes}")]
    TooManyNodes {
        /// The rejected algorithm.
        algorithm: Algorithm,
        /// Node count of the graph.
        nodes: usize,
        /// Configured ceiling.
        limit: usize,
    },
    /// The graph itself was malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimulationError::TooManyNodes {
            algorithm: Algorithm::BruteForce,
            nodes: 12,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "brute-force is limited to 10 nodes, graph has 12"
        );
        assert_eq!(
            SimulationError::SameStartEnd("A".into()).to_string(),
            "start and end must differ (both are `A`)"
        );
    }

    #[test]
    fn test_graph_error_converts() {
        let err: SimulationError = GraphError::DuplicateNode("A".into()).into();
        assert_eq!(err.to_string(), "duplicate node id `A`");
    }
}
