//! A budget folded under a strategy agrees with chaining additions of the
//! same contributions under that strategy.

use errprop_budget::{rss, ErrorBudget};
use errprop_core::{StrategyKind, UncertainValue};
use errprop_test_utils::arb::arb_measurement;
use errprop_test_utils::{approx_eq, ALL_STRATEGIES};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fold_matches_chained_addition(terms in prop::collection::vec(arb_measurement(), 1..8)) {
        for strategy in ALL_STRATEGIES {
            let mut budget = ErrorBudget::new(1_000.0);
            let mut chained = UncertainValue::exact(1_000.0, strategy).unwrap();
            for (i, (value, error)) in terms.iter().enumerate() {
                budget.add_absolute(format!("term {i}"), *error).unwrap();
                let next = UncertainValue::from_absolute(*value, *error, strategy).unwrap();
                chained = UncertainValue::new(
                    chained.value(),
                    strategy.propagate_add(chained.value(), &chained, &next).unwrap(),
                    None,
                    strategy,
                ).unwrap();
            }
            prop_assert!(approx_eq(budget.total(strategy.kind()), chained.error().absolute()));
        }
    }

    #[test]
    fn rss_is_bounded_by_linear_sum_and_largest_term(
        errors in prop::collection::vec(0.0f64..1e3, 0..16),
    ) {
        let total = rss(errors.iter().copied());
        let linear: f64 = errors.iter().sum();
        let largest = errors.iter().copied().fold(0.0, f64::max);
        prop_assert!(total <= linear * (1.0 + 1e-12) + 1e-12);
        prop_assert!(largest <= total * (1.0 + 1e-12) + 1e-12);
    }
}

#[test]
fn relative_total_against_nominal() {
    let mut budget = ErrorBudget::new(3.24);
    budget.add_percent("supply", 2.0).unwrap();
    budget.add_percent("temperature", 5.0).unwrap();
    let rel = budget.relative_total(StrategyKind::Statistical).unwrap();
    assert!(approx_eq(rel, (0.02f64.powi(2) + 0.05f64.powi(2)).sqrt()));
    let linear = budget.relative_total(StrategyKind::WorstCase).unwrap();
    assert!(approx_eq(linear, 0.07));
}
