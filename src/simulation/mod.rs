//! Simulation orchestration.
//!
//! - [`Algorithm`] — closed set of the eight solvers
//! - [`SimulationParams`] — one request (algorithm, endpoints, conditions)
//! - [`SolverLimits`] / [`search_space`] — scale guard for exponential solvers
//! - [`Simulator`] — validates a request, dispatches to a solver and derives
//!   metrics

mod algorithm;
mod limits;
mod params;
mod simulator;

pub use algorithm::{Algorithm, AlgorithmFamily};
pub use limits::{search_space, SolverLimits};
pub use params::SimulationParams;
pub use simulator::{Comparison, Simulator};
