//! `proptest` strategies.

use errprop_core::PropagationStrategy;
use proptest::prelude::*;

/// Any built-in propagation strategy.
pub fn arb_strategy() -> impl Strategy<Value = PropagationStrategy> {
    prop_oneof![
        Just(PropagationStrategy::Statistical),
        Just(PropagationStrategy::WorstCase),
        Just(PropagationStrategy::EXTREME),
    ]
}

/// A value with magnitude in `[0.01, 100)` and either sign.
pub fn arb_nonzero_value() -> impl Strategy<Value = f64> {
    (0.01f64..100.0, any::<bool>()).prop_map(|(m, negative)| if negative { -m } else { m })
}

/// A non-degenerate `(value, absolute_error)` pair: value non-zero and
/// `0 <= error < |value|`.
pub fn arb_measurement() -> impl Strategy<Value = (f64, f64)> {
    arb_nonzero_value().prop_flat_map(|v| (Just(v), 0.0..v.abs() * 0.99))
}

/// A `(value, absolute_error)` pair whose value may be exactly zero.
pub fn arb_measurement_or_zero() -> impl Strategy<Value = (f64, f64)> {
    prop_oneof![
        4 => arb_measurement(),
        1 => (Just(0.0), 0.0f64..10.0),
    ]
}
