//! Benchmark inputs for errprop.
//!
//! Provides deterministic operand sets for the criterion benches:
//!
//! - [`operand_pairs`]: `count` non-degenerate pairs under one strategy.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use errprop_core::{PropagationStrategy, UncertainValue};
use errprop_test_utils::MeasurementSampler;

/// Build `count` operand pairs under `strategy` from a seeded sampler.
///
/// Errors stay below half of each value's magnitude, which keeps every
/// operator (including exact-bound division) convergent.
pub fn operand_pairs(
    seed: u64,
    count: usize,
    strategy: PropagationStrategy,
) -> Vec<(UncertainValue, UncertainValue)> {
    let mut sampler = MeasurementSampler::new(seed).with_error_factor(0.5);
    let mut draw = || {
        let (value, error) = sampler.sample_non_degenerate();
        UncertainValue::from_absolute(value, error, strategy)
    };
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        if let (Ok(a), Ok(b)) = (draw(), draw()) {
            pairs.push((a, b));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_sized() {
        let a = operand_pairs(9, 64, PropagationStrategy::WorstCase);
        let b = operand_pairs(9, 64, PropagationStrategy::WorstCase);
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn every_pair_divides() {
        for (x, y) in operand_pairs(5, 256, PropagationStrategy::EXTREME) {
            assert!(x.div(&y).is_ok());
        }
    }
}
