//! Randomized checks of each strategy against its closed-form error.
//!
//! Operands come from a seeded sampler, so failures are reproducible.

use errprop_core::{PropagationStrategy, UncertainValue};
use errprop_test_utils::{approx_eq, measurement, MeasurementSampler};

const TRIALS: usize = 10_000;

fn trial_operands(
    sampler: &mut MeasurementSampler,
    strategy: PropagationStrategy,
) -> ((f64, f64), (f64, f64), UncertainValue, UncertainValue) {
    let a = sampler.sample_non_degenerate();
    let b = sampler.sample_non_degenerate();
    (
        a,
        b,
        measurement(a.0, a.1, strategy),
        measurement(b.0, b.1, strategy),
    )
}

fn rel(m: (f64, f64)) -> f64 {
    m.1 / m.0.abs()
}

#[test]
fn statistical_closed_forms() {
    let s = PropagationStrategy::Statistical;
    let mut sampler = MeasurementSampler::new(0x5747);
    for _ in 0..TRIALS {
        let (a, b, x, y) = trial_operands(&mut sampler, s);

        let sum_err = (a.1 * a.1 + b.1 * b.1).sqrt();
        assert!(approx_eq(s.propagate_add(a.0 + b.0, &x, &y).unwrap(), sum_err));
        assert!(approx_eq(s.propagate_sub(a.0 - b.0, &x, &y).unwrap(), sum_err));

        let product = a.0 * b.0;
        let expected = product.abs() * (rel(a).powi(2) + rel(b).powi(2)).sqrt();
        assert!(approx_eq(s.propagate_mul(product, &x, &y).unwrap(), expected));

        let quotient = a.0 / b.0;
        let expected = quotient.abs() * (rel(a).powi(2) + rel(b).powi(2)).sqrt();
        assert!(approx_eq(s.propagate_div(quotient, &x, &y).unwrap(), expected));
    }
}

#[test]
fn worst_case_closed_forms() {
    let s = PropagationStrategy::WorstCase;
    let mut sampler = MeasurementSampler::new(0xC0FFEE);
    for _ in 0..TRIALS {
        let (a, b, x, y) = trial_operands(&mut sampler, s);

        assert!(approx_eq(s.propagate_add(a.0 + b.0, &x, &y).unwrap(), a.1 + b.1));
        assert!(approx_eq(s.propagate_sub(a.0 - b.0, &x, &y).unwrap(), a.1 + b.1));

        // dx*|y| + dy*|x|
        let product = a.0 * b.0;
        let expected = a.1 * b.0.abs() + b.1 * a.0.abs();
        assert!(approx_eq(s.propagate_mul(product, &x, &y).unwrap(), expected));

        // dx/|y| + dy*|x|/y²
        let quotient = a.0 / b.0;
        let expected = a.1 / b.0.abs() + b.1 * a.0.abs() / (b.0 * b.0);
        assert!(approx_eq(s.propagate_div(quotient, &x, &y).unwrap(), expected));
    }
}

#[test]
fn extreme_closed_forms() {
    let s = PropagationStrategy::EXTREME;
    let mut sampler = MeasurementSampler::new(0xE7);
    for _ in 0..TRIALS {
        let (a, b, x, y) = trial_operands(&mut sampler, s);

        assert!(approx_eq(s.propagate_add(a.0 + b.0, &x, &y).unwrap(), a.1 + b.1));

        // dx*|y| + dy*|x| + dx*dy
        let product = a.0 * b.0;
        let expected = a.1 * b.0.abs() + b.1 * a.0.abs() + a.1 * b.1;
        assert!(approx_eq(s.propagate_mul(product, &x, &y).unwrap(), expected));

        // The upper end of the quotient interval dominates the lower end.
        let quotient = a.0 / b.0;
        let upper = (a.0.abs() + a.1) / (b.0.abs() - b.1) - quotient.abs();
        let lower = (a.0.abs() - a.1) / (b.0.abs() + b.1) - quotient.abs();
        assert!(lower <= upper);
        let got = s.propagate_div(quotient, &x, &y).unwrap();
        assert!(
            approx_eq(got, upper.max(lower)),
            "{got} vs {upper} for {a:?} / {b:?}"
        );
    }
}

#[test]
fn negation_trials() {
    let mut sampler = MeasurementSampler::new(1);
    for s in errprop_test_utils::ALL_STRATEGIES {
        for _ in 0..1000 {
            let (v, e) = sampler.sample();
            let x = measurement(v, e, s);
            assert_eq!(-x, measurement(-v, e, s));
        }
    }
}
