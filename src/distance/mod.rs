//! Distance tables and estimates.
//!
//! Provides a dense cheapest-direct-edge matrix for the tour solvers and the
//! straight-line heuristic used by A*.

mod heuristic;
mod matrix;

pub use heuristic::{heuristic_distance, METERS_PER_DEGREE};
pub use matrix::CostMatrix;
