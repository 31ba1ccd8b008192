//! Root-sum-square helpers for flat error lists.
//!
//! These cover the quick hand calculations of an error budget, where each
//! term is already known as an absolute error or a percentage and the
//! terms are assumed independent.

use errprop_core::convert::{fraction_to_percent, percent_to_fraction};

use crate::error::BudgetError;

/// Root-sum-square of absolute errors.
pub fn rss<I>(errors: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    errors.into_iter().map(|e| e * e).sum::<f64>().sqrt()
}

/// Root-sum-square of percentage errors, in percent.
pub fn rss_percent<I>(percents: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    fraction_to_percent(rss(percents.into_iter().map(percent_to_fraction)))
}

/// Combine `(value, percent)` terms as absolute errors and express the
/// total as a percentage of `result`.
///
/// Fails with [`BudgetError::ZeroReference`] if `result` is zero.
pub fn rss_as_percent<I>(result: f64, terms: I) -> Result<f64, BudgetError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    if result == 0.0 {
        return Err(BudgetError::ZeroReference { what: "result" });
    }
    let absolute = rss(
        terms
            .into_iter()
            .map(|(value, percent)| value * percent_to_fraction(percent)),
    );
    Ok(fraction_to_percent((absolute / result).abs()))
}

/// Combine `(value, absolute)` terms as relative errors and express the
/// total as an absolute error of `result`.
///
/// Fails with [`BudgetError::ZeroReference`] if any term's value is zero.
pub fn rss_as_absolute<I>(result: f64, terms: I) -> Result<f64, BudgetError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let relatives = terms
        .into_iter()
        .map(|(value, absolute)| {
            if value == 0.0 {
                Err(BudgetError::ZeroReference { what: "term value" })
            } else {
                Ok(absolute / value)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((result * rss(relatives)).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rss_of_three_four() {
        assert_eq!(rss([3.0, 4.0]), 5.0);
        assert_eq!(rss(std::iter::empty()), 0.0);
    }

    #[test]
    fn rss_percent_of_supply_and_temperature() {
        // 2% and 5% combine to sqrt(29)%.
        let total = rss_percent([2.0, 5.0]);
        assert!((total - 29f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rss_as_percent_matches_direct_calculation() {
        let v = 3.24;
        let direct = ((v * 0.02f64).powi(2) + (v * 0.05f64).powi(2)).sqrt() / v * 100.0;
        let got = rss_as_percent(v, [(v, 2.0), (v, 5.0)]).unwrap();
        assert!((got - direct).abs() < 1e-12);
    }

    #[test]
    fn rss_as_percent_rejects_zero_result() {
        assert_eq!(
            rss_as_percent(0.0, [(1.0, 1.0)]),
            Err(BudgetError::ZeroReference { what: "result" })
        );
    }

    #[test]
    fn rss_as_absolute_scales_relative_total() {
        // 10% and 10% relative → ~14.14% of 200.
        let got = rss_as_absolute(200.0, [(10.0, 1.0), (-50.0, 5.0)]).unwrap();
        assert!((got - 200.0 * 0.02f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn rss_as_absolute_rejects_zero_term() {
        assert_eq!(
            rss_as_absolute(1.0, [(0.0, 0.1)]),
            Err(BudgetError::ZeroReference { what: "term value" })
        );
    }
}
