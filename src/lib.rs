//! # u-routesim
//!
//! Route optimization and simulation over a weighted directed location graph:
//! point-to-point shortest paths, closed tours through every node, and
//! vehicle/weather/time-of-day trip metrics.
//!
//! ## Modules
//!
//! - [`models`] — Graph, nodes and edges, routes, trip conditions, results
//! - [`distance`] — Dense cost matrix and the A* straight-line heuristic
//! - [`shortest_path`] — Dijkstra, A*, Bellman-Ford, Floyd-Warshall
//! - [`tour`] — Brute force, Held-Karp, nearest neighbor, branch-and-bound
//! - [`evaluation`] — Metric tables, route metrics and jitter sources
//! - [`simulation`] — Request validation, solver dispatch, comparison
//! - [`error`] — Graph construction and request errors

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod shortest_path;
pub mod simulation;
pub mod tour;
