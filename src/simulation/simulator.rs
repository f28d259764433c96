//! Request orchestration: validate, dispatch, evaluate.

use serde::{Deserialize, Serialize};

use super::{Algorithm, AlgorithmFamily, SimulationParams, SolverLimits};
use crate::error::SimulationError;
use crate::evaluation::{JitterSource, MetricsCalculator, MetricsTables, NoJitter};
use crate::models::{Graph, Route, SimulationResult};
use crate::shortest_path::{astar, bellman_ford, dijkstra, floyd_warshall};
use crate::tour::{branch_and_bound, brute_force, held_karp, nearest_neighbor};

/// Results of running two algorithms on the same request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Result of the requested algorithm.
    pub primary: SimulationResult,
    /// Result of the comparison algorithm.
    pub comparison: SimulationResult,
}

impl Comparison {
    /// `comparison.distance - primary.distance`.
    pub fn distance_delta(&self) -> f64 {
        self.comparison.metrics.distance - self.primary.metrics.distance
    }

    /// `comparison.total_score - primary.total_score`; positive means the
    /// primary algorithm scored better.
    pub fn score_delta(&self) -> f64 {
        self.comparison.metrics.total_score - self.primary.metrics.total_score
    }
}

/// Runs simulation requests against a graph.
///
/// Holds only configuration (scale limits and metric tables); every call
/// owns its working state, so one simulator can serve concurrent requests.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::simulation::{Algorithm, SimulationParams, Simulator};
///
/// let mut g = Graph::from_parts(
///     ["A", "B", "C"].map(|id| Node::new(id, 0.0, 0.0)),
///     Vec::new(),
/// )
/// .unwrap();
/// g.add_bidirectional_edge(Edge::new("A", "B", 500.0, 60.0)).unwrap();
/// g.add_bidirectional_edge(Edge::new("B", "C", 500.0, 60.0)).unwrap();
/// g.add_bidirectional_edge(Edge::new("A", "C", 2_000.0, 240.0)).unwrap();
///
/// let sim = Simulator::new();
/// let params = SimulationParams::new(Algorithm::Dijkstra, "A").with_end("C");
/// let result = sim.run(&g, &params).unwrap();
/// assert_eq!(result.path, ["A", "B", "C"]);
/// assert_eq!(result.metrics.distance, 1_000.0);
///
/// let same = SimulationParams::new(Algorithm::Dijkstra, "A").with_end("A");
/// assert!(sim.run(&g, &same).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    limits: SolverLimits,
    tables: MetricsTables,
}

impl Simulator {
    /// Creates a simulator with default limits and tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scale limits.
    pub fn with_limits(mut self, limits: SolverLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the metric tables.
    pub fn with_tables(mut self, tables: MetricsTables) -> Self {
        self.tables = tables;
        self
    }

    /// Configured scale limits.
    pub fn limits(&self) -> &SolverLimits {
        &self.limits
    }

    /// Configured metric tables.
    pub fn tables(&self) -> &MetricsTables {
        &self.tables
    }

    /// Checks a request against the graph without solving it.
    ///
    /// Returns the end location for point-to-point requests.
    pub fn validate<'p>(
        &self,
        graph: &Graph,
        params: &'p SimulationParams,
    ) -> Result<Option<&'p str>, SimulationError> {
        let start = params.start_location.as_str();
        if graph.index_of(start).is_none() {
            return Err(SimulationError::UnknownNode(start.to_string()));
        }

        match params.algorithm.family() {
            AlgorithmFamily::PointToPoint => {
                let end = params
                    .end_location
                    .as_deref()
                    .ok_or(SimulationError::MissingEnd(params.algorithm))?;
                if graph.index_of(end).is_none() {
                    return Err(SimulationError::UnknownNode(end.to_string()));
                }
                if start == end {
                    return Err(SimulationError::SameStartEnd(start.to_string()));
                }
                Ok(Some(end))
            }
            AlgorithmFamily::Tour => {
                if let Err(err) = self.limits.check(params.algorithm, graph.node_count()) {
                    log::warn!("rejecting request: {err}");
                    return Err(err);
                }
                Ok(None)
            }
        }
    }

    /// Validates the request and runs the selected solver, returning the raw
    /// route (empty if infeasible).
    pub fn solve(&self, graph: &Graph, params: &SimulationParams) -> Result<Route, SimulationError> {
        let end = self.validate(graph, params)?;
        let start = params.start_location.as_str();
        log::debug!(
            "dispatching {} from {start} on {} nodes / {} edges",
            params.algorithm,
            graph.node_count(),
            graph.edge_count()
        );

        let route = match (params.algorithm, end) {
            (Algorithm::Dijkstra, Some(end)) => dijkstra(graph, start, end),
            (Algorithm::AStar, Some(end)) => astar(graph, start, end),
            (Algorithm::BellmanFord, Some(end)) => bellman_ford(graph, start, end),
            (Algorithm::FloydWarshall, Some(end)) => floyd_warshall(graph, start, end),
            (Algorithm::BruteForce, _) => brute_force(graph, start),
            (Algorithm::HeldKarp, _) => held_karp(graph, start),
            (Algorithm::NearestNeighbor, _) => nearest_neighbor(graph, start),
            (Algorithm::BranchAndBound, _) => branch_and_bound(graph, start),
            (algorithm, None) => return Err(SimulationError::MissingEnd(algorithm)),
        };

        log::debug!(
            "{} finished: {} nodes, distance {}, time {}",
            params.algorithm,
            route.nodes().len(),
            route.distance(),
            route.time()
        );
        Ok(route)
    }

    /// Runs a request deterministically.
    pub fn run(&self, graph: &Graph, params: &SimulationParams) -> Result<SimulationResult, SimulationError> {
        self.run_with_jitter(graph, params, &mut NoJitter)
    }

    /// Runs a request, then perturbs the impact scores with `jitter`.
    ///
    /// Path, distance and time are unaffected by the jitter source.
    pub fn run_with_jitter(
        &self,
        graph: &Graph,
        params: &SimulationParams,
        jitter: &mut dyn JitterSource,
    ) -> Result<SimulationResult, SimulationError> {
        let route = self.solve(graph, params)?;
        if route.is_empty() {
            log::info!(
                "{} found no feasible {} from {}",
                params.algorithm,
                match params.algorithm.family() {
                    AlgorithmFamily::PointToPoint => "path",
                    AlgorithmFamily::Tour => "tour",
                },
                params.start_location
            );
            return Ok(SimulationResult::infeasible(params.algorithm));
        }

        let calculator = MetricsCalculator::new(&self.tables);
        let metrics = calculator.for_route(graph, &route, &params.conditions);
        let metrics = calculator.apply_jitter(metrics, jitter);
        Ok(SimulationResult {
            algorithm: params.algorithm,
            path: route.into_nodes(),
            metrics,
        })
    }

    /// Runs `params` and the same request with `other` in parallel.
    pub fn compare(
        &self,
        graph: &Graph,
        params: &SimulationParams,
        other: Algorithm,
    ) -> Result<Comparison, SimulationError> {
        let other_params = params.clone().with_algorithm(other);
        let (primary, comparison) = rayon::join(
            || self.run(graph, params),
            || self.run(graph, &other_params),
        );
        Ok(Comparison {
            primary: primary?,
            comparison: comparison?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::UniformJitter;
    use crate::models::graph::square_graph;
    use crate::models::{Edge, Node, Weather};
    use rstest::rstest;

    #[rstest]
    #[case(Algorithm::Dijkstra)]
    #[case(Algorithm::AStar)]
    #[case(Algorithm::BellmanFord)]
    #[case(Algorithm::FloydWarshall)]
    fn test_point_to_point_square(#[case] algorithm: Algorithm) {
        let sim = Simulator::new();
        let params = SimulationParams::new(algorithm, "A").with_end("C");
        let result = sim.run(&square_graph(), &params).expect("valid request");
        assert_eq!(result.algorithm, algorithm);
        assert_eq!(result.path, ["A", "C"]);
        assert_eq!(result.metrics.distance, 15.0);
        assert_eq!(result.metrics.time, 90.0);
    }

    #[rstest]
    #[case(Algorithm::BruteForce)]
    #[case(Algorithm::HeldKarp)]
    #[case(Algorithm::BranchAndBound)]
    fn test_exact_tours_square(#[case] algorithm: Algorithm) {
        let sim = Simulator::new();
        let params = SimulationParams::new(algorithm, "A");
        let result = sim.run(&square_graph(), &params).expect("valid request");
        assert_eq!(result.path.first().map(String::as_str), Some("A"));
        assert_eq!(result.path.last().map(String::as_str), Some("A"));
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.metrics.distance, 40.0);
    }

    #[test]
    fn test_nearest_neighbor_not_better_than_optimum() {
        let sim = Simulator::new();
        let params = SimulationParams::new(Algorithm::NearestNeighbor, "A");
        let result = sim.run(&square_graph(), &params).expect("valid request");
        assert!(result.metrics.distance >= 40.0);
    }

    #[test]
    fn test_same_start_end_rejected() {
        let g = Graph::from_parts(vec![Node::new("only", 0.0, 0.0)], Vec::new()).expect("valid");
        let params = SimulationParams::new(Algorithm::Dijkstra, "only").with_end("only");
        assert_eq!(
            Simulator::new().run(&g, &params),
            Err(SimulationError::SameStartEnd("only".into()))
        );
    }

    #[test]
    fn test_missing_end_rejected() {
        let params = SimulationParams::new(Algorithm::AStar, "A");
        assert_eq!(
            Simulator::new().run(&square_graph(), &params),
            Err(SimulationError::MissingEnd(Algorithm::AStar))
        );
    }

    #[test]
    fn test_unknown_nodes_rejected() {
        let sim = Simulator::new();
        let g = square_graph();
        let p = SimulationParams::new(Algorithm::HeldKarp, "Z");
        assert_eq!(sim.run(&g, &p), Err(SimulationError::UnknownNode("Z".into())));
        let p = SimulationParams::new(Algorithm::Dijkstra, "A").with_end("Y");
        assert_eq!(sim.run(&g, &p), Err(SimulationError::UnknownNode("Y".into())));
    }

    #[test]
    fn test_tour_ignores_end() {
        let params = SimulationParams::new(Algorithm::HeldKarp, "B").with_end("B");
        let result = Simulator::new().run(&square_graph(), &params).expect("valid");
        assert_eq!(result.metrics.distance, 40.0);
    }

    #[test]
    fn test_limit_rejects_before_solving() {
        let sim = Simulator::new().with_limits(SolverLimits::default().with_brute_force(3));
        let params = SimulationParams::new(Algorithm::BruteForce, "A");
        assert_eq!(
            sim.run(&square_graph(), &params),
            Err(SimulationError::TooManyNodes {
                algorithm: Algorithm::BruteForce,
                nodes: 4,
                limit: 3,
            })
        );
    }

    #[test]
    fn test_infeasible_is_zero_result() {
        let g = Graph::from_parts(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 0.0)],
            vec![Edge::new("A", "B", 1.0, 1.0)],
        )
        .expect("valid");
        let sim = Simulator::new();
        for algorithm in Algorithm::ALL {
            let params = SimulationParams::new(algorithm, "B").with_end("A");
            let result = sim.run(&g, &params).expect("valid request");
            assert!(result.is_infeasible(), "{algorithm}");
            assert!(result.metrics.is_zero(), "{algorithm}");
        }
    }

    #[test]
    fn test_idempotent() {
        let sim = Simulator::new();
        let g = square_graph();
        for algorithm in Algorithm::ALL {
            let params = SimulationParams::new(algorithm, "B").with_end("D");
            let a = sim.run(&g, &params).expect("valid");
            let b = sim.run(&g, &params).expect("valid");
            assert_eq!(a, b, "{algorithm}");
        }
    }

    #[test]
    fn test_jitter_keeps_route_fields() {
        let sim = Simulator::new();
        let g = square_graph();
        let params = SimulationParams::new(Algorithm::Dijkstra, "A")
            .with_end("C")
            .with_weather(Weather::Rain);
        let plain = sim.run(&g, &params).expect("valid");
        let jittered = sim
            .run_with_jitter(&g, &params, &mut UniformJitter::seeded(5, 1.0))
            .expect("valid");
        assert_eq!(plain.path, jittered.path);
        assert_eq!(plain.metrics.distance, jittered.metrics.distance);
        assert_eq!(plain.metrics.time, jittered.metrics.time);
        assert_eq!(plain.metrics.cost, jittered.metrics.cost);
    }

    #[test]
    fn test_compare() {
        let sim = Simulator::new();
        let params = SimulationParams::new(Algorithm::HeldKarp, "A");
        let cmp = sim
            .compare(&square_graph(), &params, Algorithm::NearestNeighbor)
            .expect("valid");
        assert_eq!(cmp.primary.algorithm, Algorithm::HeldKarp);
        assert_eq!(cmp.comparison.algorithm, Algorithm::NearestNeighbor);
        assert!(cmp.distance_delta() >= 0.0);
    }

    #[test]
    fn test_compare_propagates_errors() {
        let sim = Simulator::new();
        let params = SimulationParams::new(Algorithm::HeldKarp, "A");
        assert_eq!(
            sim.compare(&square_graph(), &params, Algorithm::Dijkstra),
            Err(SimulationError::MissingEnd(Algorithm::Dijkstra))
        );
    }
}
