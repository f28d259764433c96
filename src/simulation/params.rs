//! Simulation request parameters.

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::models::{MapContext, TimeOfDay, TripConditions, VehicleProfile, Weather};

/// One simulation request.
///
/// `end_location` is only read by point-to-point algorithms. Serialized
/// field names are camelCase (`startLocation`, `timeOfDay`, ...), with the
/// condition fields inline.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{VehicleProfile, Weather};
/// use u_routesim::simulation::{Algorithm, SimulationParams};
///
/// let p = SimulationParams::new(Algorithm::Dijkstra, "depot")
///     .with_end("warehouse")
///     .with_vehicle(VehicleProfile::Truck)
///     .with_weather(Weather::Rain);
/// assert_eq!(p.end_location.as_deref(), Some("warehouse"));
/// assert_eq!(p.conditions.vehicle, VehicleProfile::Truck);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Solver to run.
    pub algorithm: Algorithm,
    /// Start node id (tour origin for tour algorithms).
    pub start_location: String,
    /// End node id for point-to-point algorithms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<String>,
    /// Vehicle and environment.
    #[serde(flatten)]
    pub conditions: TripConditions,
}

impl SimulationParams {
    /// Creates a request with default conditions and no end location.
    pub fn new(algorithm: Algorithm, start: impl Into<String>) -> Self {
        Self {
            algorithm,
            start_location: start.into(),
            end_location: None,
            conditions: TripConditions::default(),
        }
    }

    /// Parses a request from JSON.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the end location.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end_location = Some(end.into());
        self
    }

    /// Replaces the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replaces all conditions.
    pub fn with_conditions(mut self, conditions: TripConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the vehicle.
    pub fn with_vehicle(mut self, vehicle: VehicleProfile) -> Self {
        self.conditions.vehicle = vehicle;
        self
    }

    /// Sets the weather.
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.conditions.weather = weather;
        self
    }

    /// Sets the time of day.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.conditions.time_of_day = time_of_day;
        self
    }

    /// Sets the map context.
    pub fn with_map_context(mut self, map_context: MapContext) -> Self {
        self.conditions.map_context = map_context;
        self
    }
}
