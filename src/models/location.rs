//! Node and edge types.

use serde::{Deserialize, Serialize};

/// A location in the road graph.
///
/// Identity is the `id`. Coordinates (degrees) only feed the A* heuristic;
/// edge weights are authoritative for every solver.
///
/// # Examples
///
/// ```
/// use u_routesim::models::Node;
///
/// let n = Node::new("depot", 52.52, 13.40);
/// assert_eq!(n.id(), "depot");
/// assert_eq!(n.lat(), 52.52);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    lat: f64,
    lng: f64,
}

impl Node {
    /// Creates a node at the given latitude/longitude.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }

    /// Node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// A directed, weighted connection between two nodes.
///
/// Two-way streets are modelled as two edges. `distance` is in meters and
/// `time` in seconds; `traffic_factor` is a congestion multiplier (≥ 1 in
/// normal data) that only the metrics calculator reads.
///
/// # Examples
///
/// ```
/// use u_routesim::models::Edge;
///
/// let e = Edge::new("A", "B", 1200.0, 90.0).with_traffic_factor(1.4);
/// assert_eq!(e.from(), "A");
/// assert_eq!(e.traffic_factor(), 1.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    from: String,
    to: String,
    distance: f64,
    time: f64,
    #[serde(default = "default_traffic_factor")]
    traffic_factor: f64,
}

fn default_traffic_factor() -> f64 {
    1.0
}

impl Edge {
    /// Creates an edge with a neutral traffic factor of 1.0.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64, time: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            time,
            traffic_factor: default_traffic_factor(),
        }
    }

    /// Sets the traffic factor.
    pub fn with_traffic_factor(mut self, factor: f64) -> Self {
        self.traffic_factor = factor;
        self
    }

    /// Returns the same edge in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            ..self.clone()
        }
    }

    /// Origin node id.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Destination node id.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Length in meters. This is the weight every solver minimizes.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Travel time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Congestion multiplier.
    pub fn traffic_factor(&self) -> f64 {
        self.traffic_factor
    }
}
