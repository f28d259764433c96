//! Metrics calculator: turns a route into time, cost, fuel and impact
//! figures under a vehicle and conditions.

use super::{JitterSource, MetricsTables};
use crate::models::{Graph, Metrics, Route, TripConditions};

/// Computes [`Metrics`] from route totals and lookup tables.
///
/// ```text
/// fuel           = fuel_rate[vehicle] · weather_mult[weather] · time_mult[tod] · km
/// cost           = km · cost_per_km[vehicle] + minutes · time_cost + surcharge[weather]
/// traffic_impact = clamp(0, 10, mean(traffic factors) · time_mult[tod] · 2)
/// weather_impact = clamp(0, 10, severity[weather] · infrastructure[context])
/// total_score    = Σ weightᵢ · normalizeᵢ(metricᵢ)     (lower is better)
/// ```
///
/// # Examples
///
/// ```
/// use u_routesim::evaluation::{MetricsCalculator, MetricsTables};
/// use u_routesim::models::TripConditions;
///
/// let tables = MetricsTables::default();
/// let calc = MetricsCalculator::new(&tables);
/// let m = calc.calculate(&TripConditions::default(), 10_000.0, 1_200.0, &[1.0, 1.5]);
///
/// assert!((m.fuel - 0.8).abs() < 1e-10);
/// assert!((m.cost - 6.5).abs() < 1e-10);
/// assert!((m.traffic_impact - 2.5).abs() < 1e-10);
/// assert_eq!(m.weather_impact, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricsCalculator<'a> {
    tables: &'a MetricsTables,
}

impl<'a> MetricsCalculator<'a> {
    /// Creates a calculator over the given tables.
    pub fn new(tables: &'a MetricsTables) -> Self {
        Self { tables }
    }

    /// Computes metrics from raw totals.
    ///
    /// `distance` is in meters, `time` in seconds. An empty
    /// `traffic_factors` slice counts as zero traffic.
    pub fn calculate(
        &self,
        conditions: &TripConditions,
        distance: f64,
        time: f64,
        traffic_factors: &[f64],
    ) -> Metrics {
        let t = self.tables;
        let km = distance / 1000.0;
        let minutes = time / 60.0;
        let time_mult = t.time_multiplier(conditions.time_of_day);

        let fuel = t.fuel_rate(conditions.vehicle)
            * t.weather_multiplier(conditions.weather)
            * time_mult
            * km;
        let cost = km * t.cost_per_km(conditions.vehicle)
            + minutes * t.time_cost_per_minute()
            + t.weather_surcharge(conditions.weather);

        let mean_traffic = if traffic_factors.is_empty() {
            0.0
        } else {
            traffic_factors.iter().sum::<f64>() / traffic_factors.len() as f64
        };
        let traffic_impact = clamp_impact(mean_traffic * time_mult * 2.0);
        let weather_impact = clamp_impact(
            t.weather_severity(conditions.weather)
                * t.infrastructure_modifier(conditions.map_context),
        );

        let mut metrics = Metrics {
            time,
            distance,
            cost,
            fuel,
            traffic_impact,
            weather_impact,
            total_score: 0.0,
        };
        metrics.total_score = self.total_score(&metrics);
        metrics
    }

    /// Computes metrics for a solved route. The empty route yields all-zero
    /// metrics.
    pub fn for_route(&self, graph: &Graph, route: &Route, conditions: &TripConditions) -> Metrics {
        if route.is_empty() {
            return Metrics::default();
        }
        self.calculate(
            conditions,
            route.distance(),
            route.time(),
            &route.traffic_factors(graph),
        )
    }

    /// Weighted 0–100 score of the metrics (ignores `metrics.total_score`).
    pub fn total_score(&self, metrics: &Metrics) -> f64 {
        let w = self.tables.weights();
        w.time * normalize(metrics.time, w.time_ceiling)
            + w.distance * normalize(metrics.distance, w.distance_ceiling)
            + w.cost * normalize(metrics.cost, w.cost_ceiling)
            + w.fuel * normalize(metrics.fuel, w.fuel_ceiling)
            + w.traffic * normalize(metrics.traffic_impact, 10.0)
            + w.weather * normalize(metrics.weather_impact, 10.0)
    }

    /// Perturbs the traffic and weather impacts, re-clamps them and
    /// recomputes the score. Zero metrics (infeasible results) pass through
    /// unchanged.
    pub fn apply_jitter(&self, metrics: Metrics, source: &mut dyn JitterSource) -> Metrics {
        if metrics.is_zero() {
            return metrics;
        }
        let mut jittered = Metrics {
            traffic_impact: clamp_impact(source.perturb(metrics.traffic_impact)),
            weather_impact: clamp_impact(source.perturb(metrics.weather_impact)),
            ..metrics
        };
        jittered.total_score = self.total_score(&jittered);
        jittered
    }
}

fn clamp_impact(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

fn normalize(value: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (value / ceiling * 100.0).clamp(0.0, 100.0)
}
