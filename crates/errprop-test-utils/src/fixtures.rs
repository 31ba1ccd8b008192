//! Reusable operands and strategy sets.

use errprop_core::{PropagationStrategy, UncertainValue};

/// The three built-in strategies, from least to most conservative.
pub const ALL_STRATEGIES: [PropagationStrategy; 3] = [
    PropagationStrategy::Statistical,
    PropagationStrategy::WorstCase,
    PropagationStrategy::EXTREME,
];

/// Build `value ± absolute` under `strategy`, panicking on invalid input.
///
/// Test-only convenience: production code propagates the error instead.
pub fn measurement(value: f64, absolute: f64, strategy: PropagationStrategy) -> UncertainValue {
    UncertainValue::from_absolute(value, absolute, strategy).unwrap_or_else(|e| {
        panic!("invalid test measurement {value} \u{00B1} {absolute}: {e}")
    })
}

/// The same two `(value, absolute)` pairs built under each strategy in
/// [`ALL_STRATEGIES`] order.
pub fn operand_pairs(a: (f64, f64), b: (f64, f64)) -> [(UncertainValue, UncertainValue); 3] {
    ALL_STRATEGIES.map(|s| (measurement(a.0, a.1, s), measurement(b.0, b.1, s)))
}
