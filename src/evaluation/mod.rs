//! Route evaluation: derives time, cost, fuel, impact and score metrics.
//!
//! - [`MetricsCalculator`] — pure formulas over route totals
//! - [`MetricsTables`] — per-vehicle/weather/time/context constants
//! - [`JitterSource`] — optional, caller-owned randomness for impact scores

mod jitter;
mod metrics;
mod tables;

pub use jitter::{JitterSource, NoJitter, UniformJitter};
pub use metrics::MetricsCalculator;
pub use tables::{MetricsTables, ScoreWeights};
