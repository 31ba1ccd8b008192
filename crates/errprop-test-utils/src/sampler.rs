//! Seeded generator of random measurements.
//!
//! Produces `(value, absolute_error)` pairs with `value` uniform in
//! `[-range, range)` and the error uniform in `[0, |value| * factor)`.
//! Identical seeds produce identical sequences.

use errprop_core::{PropagationError, PropagationStrategy, UncertainValue};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random-measurement generator.
#[derive(Clone, Debug)]
pub struct MeasurementSampler {
    rng: ChaCha8Rng,
    range: f64,
    factor: f64,
}

impl MeasurementSampler {
    /// Values in `[-100, 100)`, errors up to the value's magnitude.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            range: 100.0,
            factor: 1.0,
        }
    }

    /// Set the half-width of the value range.
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    /// Set the maximum error as a multiple of the value's magnitude.
    ///
    /// Factors above [`MAX_RELATIVE_ERROR`](errprop_core::MAX_RELATIVE_ERROR)
    /// produce measurements that fail construction.
    pub fn with_error_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Draw one `(value, absolute_error)` pair.
    pub fn sample(&mut self) -> (f64, f64) {
        let value = self.rng.random_range(-self.range..self.range);
        let error = self.rng.random::<f64>() * value.abs() * self.factor;
        (value, error)
    }

    /// Draw one pair whose value is non-zero and whose error stays
    /// strictly below the value's magnitude.
    pub fn sample_non_degenerate(&mut self) -> (f64, f64) {
        loop {
            let (value, error) = self.sample();
            if value != 0.0 && error < value.abs() {
                return (value, error);
            }
        }
    }

    /// Draw one measurement under `strategy`.
    pub fn measurement(
        &mut self,
        strategy: PropagationStrategy,
    ) -> Result<UncertainValue, PropagationError> {
        let (value, error) = self.sample();
        UncertainValue::from_absolute(value, error, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MeasurementSampler::new(7);
        let mut b = MeasurementSampler::new(7);
        for _ in 0..100 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn samples_respect_bounds() {
        let mut s = MeasurementSampler::new(42).with_range(10.0).with_error_factor(0.5);
        for _ in 0..1000 {
            let (value, error) = s.sample();
            assert!((-10.0..10.0).contains(&value));
            assert!(error >= 0.0);
            assert!(error <= value.abs() * 0.5);
        }
    }

    #[test]
    fn non_degenerate_samples() {
        let mut s = MeasurementSampler::new(3);
        for _ in 0..1000 {
            let (value, error) = s.sample_non_degenerate();
            assert!(value != 0.0);
            assert!(error < value.abs());
        }
    }

    #[test]
    fn measurements_construct() {
        let mut s = MeasurementSampler::new(11);
        for _ in 0..100 {
            let m = s.measurement(PropagationStrategy::WorstCase).unwrap();
            assert_eq!(m.strategy(), PropagationStrategy::WorstCase);
        }
    }
}
