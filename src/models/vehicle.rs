//! Vehicle and environmental condition enumerations.
//!
//! These are opaque to the solvers; only the metrics calculator reads them,
//! through the lookup tables in
//! [`MetricsTables`](crate::evaluation::MetricsTables). Each enum exposes a
//! dense `index()` so tables are plain arrays.

use serde::{Deserialize, Serialize};

/// Kind of vehicle driving the route.
///
/// # Examples
///
/// ```
/// use u_routesim::models::VehicleProfile;
///
/// assert_eq!(VehicleProfile::default(), VehicleProfile::Car);
/// assert_eq!(VehicleProfile::ALL.len(), VehicleProfile::COUNT);
/// assert_eq!(VehicleProfile::Truck.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleProfile {
    /// Passenger car.
    #[default]
    Car,
    /// Heavy goods vehicle.
    Truck,
    /// Motorcycle or scooter.
    Motorcycle,
    /// Battery electric car; fuel is reported as energy.
    Electric,
    /// Bicycle; consumes no fuel.
    Bicycle,
}

impl VehicleProfile {
    /// Number of variants.
    pub const COUNT: usize = 5;

    /// Every variant in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Car,
        Self::Truck,
        Self::Motorcycle,
        Self::Electric,
        Self::Bicycle,
    ];

    /// Row index into per-vehicle lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Weather during the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// No precipitation.
    #[default]
    Clear,
    /// Rain.
    Rain,
    /// Reduced visibility.
    Fog,
    /// Snow or ice.
    Snow,
    /// Severe storm.
    Storm,
}

impl Weather {
    /// Number of variants.
    pub const COUNT: usize = 5;

    /// Every variant in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Clear,
        Self::Rain,
        Self::Fog,
        Self::Snow,
        Self::Storm,
    ];

    /// Row index into per-weather lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Time of day the trip starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning rush.
    Morning,
    /// Off-peak daytime.
    #[default]
    Afternoon,
    /// Evening rush.
    Evening,
    /// Night, light traffic.
    Night,
}

impl TimeOfDay {
    /// Number of variants.
    pub const COUNT: usize = 4;

    /// Every variant in table order.
    pub const ALL: [Self; Self::COUNT] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Row index into per-time lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Kind of area the map covers; scales how much weather disrupts travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapContext {
    /// Dense city with good drainage and clearing.
    Urban,
    /// Mixed residential.
    #[default]
    Suburban,
    /// Country roads.
    Rural,
    /// Mountain passes.
    Mountain,
}

impl MapContext {
    /// Number of variants.
    pub const COUNT: usize = 4;

    /// Every variant in table order.
    pub const ALL: [Self; Self::COUNT] = [Self::Urban, Self::Suburban, Self::Rural, Self::Mountain];

    /// Row index into per-context lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The vehicle and environment a route is evaluated under.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{TripConditions, VehicleProfile, Weather};
///
/// let c = TripConditions::default()
///     .with_vehicle(VehicleProfile::Truck)
///     .with_weather(Weather::Snow);
/// assert_eq!(c.vehicle, VehicleProfile::Truck);
/// assert_eq!(c.weather, Weather::Snow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripConditions {
    /// Vehicle profile.
    #[serde(default)]
    pub vehicle: VehicleProfile,
    /// Weather.
    #[serde(default)]
    pub weather: Weather,
    /// Time of day.
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Map context.
    #[serde(default)]
    pub map_context: MapContext,
}

impl TripConditions {
    /// Sets the vehicle.
    pub fn with_vehicle(mut self, vehicle: VehicleProfile) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Sets the weather.
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    /// Sets the time of day.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Sets the map context.
    pub fn with_map_context(mut self, map_context: MapContext) -> Self {
        self.map_context = map_context;
        self
    }
}
