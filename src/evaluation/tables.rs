//! Static lookup tables for the metrics calculator.

use serde::{Deserialize, Serialize};

use crate::models::{MapContext, TimeOfDay, VehicleProfile, Weather};

/// Weights and normalization ceilings for the aggregate score.
///
/// Each metric is mapped linearly onto 0–100 (`value / ceiling · 100`,
/// clamped) and the weighted sum is the score. Impacts already live on 0–10
/// and are scaled by 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Weight of travel time.
    pub time: f64,
    /// Weight of distance.
    pub distance: f64,
    /// Weight of monetary cost.
    pub cost: f64,
    /// Weight of fuel or energy use.
    pub fuel: f64,
    /// Weight of traffic impact.
    pub traffic: f64,
    /// Weight of weather impact.
    pub weather: f64,
    /// Time (seconds) that scores 100.
    pub time_ceiling: f64,
    /// Distance (meters) that scores 100.
    pub distance_ceiling: f64,
    /// Cost that scores 100.
    pub cost_ceiling: f64,
    /// Fuel that scores 100.
    pub fuel_ceiling: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            time: 0.25,
            distance: 0.20,
            cost: 0.20,
            fuel: 0.15,
            traffic: 0.10,
            weather: 0.10,
            time_ceiling: 7_200.0,
            distance_ceiling: 100_000.0,
            cost_ceiling: 100.0,
            fuel_ceiling: 20.0,
        }
    }
}

impl ScoreWeights {
    /// Returns `true` if the six weights sum to 1 within `tol`.
    pub fn is_normalized(&self, tol: f64) -> bool {
        let sum = self.time + self.distance + self.cost + self.fuel + self.traffic + self.weather;
        (sum - 1.0).abs() <= tol
    }
}

/// Per-vehicle, per-weather, per-time-of-day and per-map-context constants.
///
/// Rows are indexed by each enum's `index()`. The default values are the
/// engine's reference calibration; callers may replace any entry with the
/// `with_*` builders.
///
/// # Examples
///
/// ```
/// use u_routesim::evaluation::MetricsTables;
/// use u_routesim::models::{VehicleProfile, Weather};
///
/// let tables = MetricsTables::default().with_fuel_rate(VehicleProfile::Car, 0.06);
/// assert_eq!(tables.fuel_rate(VehicleProfile::Car), 0.06);
/// assert_eq!(tables.weather_surcharge(Weather::Storm), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsTables {
    fuel_rate: [f64; VehicleProfile::COUNT],
    cost_per_km: [f64; VehicleProfile::COUNT],
    weather_multiplier: [f64; Weather::COUNT],
    weather_surcharge: [f64; Weather::COUNT],
    weather_severity: [f64; Weather::COUNT],
    time_multiplier: [f64; TimeOfDay::COUNT],
    infrastructure_modifier: [f64; MapContext::COUNT],
    time_cost_per_minute: f64,
    weights: ScoreWeights,
}

impl Default for MetricsTables {
    fn default() -> Self {
        Self {
            // car, truck, motorcycle, electric, bicycle
            fuel_rate: [0.08, 0.25, 0.045, 0.18, 0.0],
            cost_per_km: [0.15, 0.45, 0.08, 0.06, 0.0],
            // clear, rain, fog, snow, storm
            weather_multiplier: [1.0, 1.1, 1.05, 1.25, 1.3],
            weather_surcharge: [0.0, 2.0, 1.5, 5.0, 8.0],
            weather_severity: [0.0, 4.0, 5.0, 7.0, 9.0],
            // morning, afternoon, evening, night
            time_multiplier: [1.3, 1.0, 1.4, 0.8],
            // urban, suburban, rural, mountain
            infrastructure_modifier: [0.8, 1.0, 1.2, 1.4],
            time_cost_per_minute: 0.25,
            weights: ScoreWeights::default(),
        }
    }
}

impl MetricsTables {
    /// Fuel (or energy) used per kilometer in clear weather off-peak.
    pub fn fuel_rate(&self, vehicle: VehicleProfile) -> f64 {
        self.fuel_rate[vehicle.index()]
    }

    /// Running cost per kilometer.
    pub fn cost_per_km(&self, vehicle: VehicleProfile) -> f64 {
        self.cost_per_km[vehicle.index()]
    }

    /// Fuel multiplier for the weather.
    pub fn weather_multiplier(&self, weather: Weather) -> f64 {
        self.weather_multiplier[weather.index()]
    }

    /// Flat cost surcharge for the weather.
    pub fn weather_surcharge(&self, weather: Weather) -> f64 {
        self.weather_surcharge[weather.index()]
    }

    /// Base weather severity on the 0–10 impact scale.
    pub fn weather_severity(&self, weather: Weather) -> f64 {
        self.weather_severity[weather.index()]
    }

    /// Congestion multiplier for the time of day.
    pub fn time_multiplier(&self, time_of_day: TimeOfDay) -> f64 {
        self.time_multiplier[time_of_day.index()]
    }

    /// How strongly the area amplifies weather impact.
    pub fn infrastructure_modifier(&self, context: MapContext) -> f64 {
        self.infrastructure_modifier[context.index()]
    }

    /// Cost per minute of travel time.
    pub fn time_cost_per_minute(&self) -> f64 {
        self.time_cost_per_minute
    }

    /// Score weights and ceilings.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Sets the fuel rate for one vehicle.
    pub fn with_fuel_rate(mut self, vehicle: VehicleProfile, rate: f64) -> Self {
        self.fuel_rate[vehicle.index()] = rate;
        self
    }

    /// Sets the cost per kilometer for one vehicle.
    pub fn with_cost_per_km(mut self, vehicle: VehicleProfile, cost: f64) -> Self {
        self.cost_per_km[vehicle.index()] = cost;
        self
    }

    /// Sets the fuel multiplier, surcharge and severity for one weather.
    pub fn with_weather(mut self, weather: Weather, multiplier: f64, surcharge: f64, severity: f64) -> Self {
        let i = weather.index();
        self.weather_multiplier[i] = multiplier;
        self.weather_surcharge[i] = surcharge;
        self.weather_severity[i] = severity;
        self
    }

    /// Sets the congestion multiplier for one time of day.
    pub fn with_time_multiplier(mut self, time_of_day: TimeOfDay, multiplier: f64) -> Self {
        self.time_multiplier[time_of_day.index()] = multiplier;
        self
    }

    /// Sets the infrastructure modifier for one map context.
    pub fn with_infrastructure_modifier(mut self, context: MapContext, modifier: f64) -> Self {
        self.infrastructure_modifier[context.index()] = modifier;
        self
    }

    /// Sets the cost per minute of travel.
    pub fn with_time_cost_per_minute(mut self, cost: f64) -> Self {
        self.time_cost_per_minute = cost;
        self
    }

    /// Replaces the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }
}
