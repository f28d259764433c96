//! Domain model types for route and tour simulation.
//!
//! Provides the weighted directed graph consumed by every solver, the raw
//! route a solver returns, the vehicle and condition enumerations read by
//! the metrics calculator, and the result record handed back to callers.

pub(crate) mod graph;
mod location;
mod route;
mod solution;
mod vehicle;

pub use graph::Graph;
pub use location::{Edge, Node};
pub use route::Route;
pub use solution::{Metrics, SimulationResult};
pub use vehicle::{MapContext, TimeOfDay, TripConditions, VehicleProfile, Weather};
