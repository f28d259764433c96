//! Metrics and simulation result types.

use serde::{Deserialize, Serialize};

use crate::simulation::Algorithm;

/// Multi-factor summary of a route under a vehicle and conditions.
///
/// `traffic_impact` and `weather_impact` lie in `[0, 10]`. `total_score` is a
/// weighted blend of all factors on a 0–100 scale; lower is better. The
/// all-zero value is the "no result" sentinel used for infeasible requests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Travel time in seconds.
    pub time: f64,
    /// Distance in meters.
    pub distance: f64,
    /// Monetary cost.
    pub cost: f64,
    /// Fuel (liters) or energy (kWh for electric vehicles).
    pub fuel: f64,
    /// Congestion impact, 0–10.
    pub traffic_impact: f64,
    /// Weather impact, 0–10.
    pub weather_impact: f64,
    /// Weighted aggregate score, lower is better.
    pub total_score: f64,
}

impl Metrics {
    /// Returns `true` if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Outcome of one simulation request.
///
/// Created fresh per request and owned by the caller. `path` is empty if and
/// only if no feasible path or tour exists, in which case `metrics` is all
/// zero.
///
/// # Examples
///
/// ```
/// use u_routesim::models::SimulationResult;
/// use u_routesim::simulation::Algorithm;
///
/// let r = SimulationResult::infeasible(Algorithm::Dijkstra);
/// assert!(r.is_infeasible());
/// assert!(r.metrics.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,
    /// Node ids in travel order.
    pub path: Vec<String>,
    /// Derived metrics.
    pub metrics: Metrics,
}

impl SimulationResult {
    /// The sentinel result for an infeasible request.
    pub fn infeasible(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            path: Vec::new(),
            metrics: Metrics::default(),
        }
    }

    /// Returns `true` if no path or tour was found.
    pub fn is_infeasible(&self) -> bool {
        self.path.is_empty()
    }

    /// Serializes the result to JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_default_is_zero() {
        assert!(Metrics::default().is_zero());
        let m = Metrics {
            fuel: 0.1,
            ..Metrics::default()
        };
        assert!(!m.is_zero());
    }

    #[test]
    fn test_infeasible_result() {
        let r = SimulationResult::infeasible(Algorithm::HeldKarp);
        assert!(r.is_infeasible());
        assert_eq!(r.algorithm, Algorithm::HeldKarp);
        assert!(r.metrics.is_zero());
    }
}
