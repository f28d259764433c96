//! Injectable randomness for impact scores.
//!
//! The metric formulas are deterministic. Callers that want the traffic and
//! weather impacts to vary between runs pass a [`JitterSource`] to
//! [`MetricsCalculator::apply_jitter`](super::MetricsCalculator::apply_jitter)
//! or [`Simulator::run_with_jitter`](crate::simulation::Simulator::run_with_jitter).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of perturbations applied to impact scores.
pub trait JitterSource {
    /// Returns `value` with noise applied.
    fn perturb(&mut self, value: f64) -> f64;
}

/// The identity source: leaves every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn perturb(&mut self, value: f64) -> f64 {
        value
    }
}

/// Adds a uniform offset in `[-amplitude, amplitude]`.
///
/// # Examples
///
/// ```
/// use u_routesim::evaluation::{JitterSource, UniformJitter};
///
/// let mut a = UniformJitter::seeded(7, 0.5);
/// let mut b = UniformJitter::seeded(7, 0.5);
/// let x = a.perturb(5.0);
/// assert_eq!(x, b.perturb(5.0));
/// assert!((4.5..=5.5).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct UniformJitter<R = StdRng> {
    rng: R,
    amplitude: f64,
}

impl UniformJitter<StdRng> {
    /// Offset range used when callers have no calibration of their own.
    pub const DEFAULT_AMPLITUDE: f64 = 0.5;

    /// Creates a reproducible source from a seed.
    pub fn seeded(seed: u64, amplitude: f64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), amplitude)
    }
}

impl<R: Rng> UniformJitter<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R, amplitude: f64) -> Self {
        Self {
            rng,
            amplitude: amplitude.abs(),
        }
    }

    /// Half-width of the offset range.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn perturb(&mut self, value: f64) -> f64 {
        if self.amplitude == 0.0 {
            return value;
        }
        value + self.rng.random_range(-self.amplitude..=self.amplitude)
    }
}
