//! Conversions between absolute, fractional, percent and ppm errors.
//!
//! Relative errors are stored as plain fractions (`0.01` is one percent).
//! These helpers are the only place the percent and ppm scale factors live.

/// Fraction → percent scale factor.
pub const PERCENT_SCALE: f64 = 100.0;

/// Fraction → parts-per-million scale factor.
pub const PPM_SCALE: f64 = 1e6;

/// Convert a fractional error to percent.
pub fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * PERCENT_SCALE
}

/// Convert a percent error to a fraction.
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / PERCENT_SCALE
}

/// Convert a fractional error to parts per million.
pub fn fraction_to_ppm(fraction: f64) -> f64 {
    fraction * PPM_SCALE
}

/// Convert a parts-per-million error to a fraction.
pub fn ppm_to_fraction(ppm: f64) -> f64 {
    ppm / PPM_SCALE
}

/// Derive the relative error of `absolute` against a reference `value`.
///
/// Returns `None` when `value` is zero: the relative error is then
/// unknown, not zero.
pub fn absolute_to_relative(value: f64, absolute: f64) -> Option<f64> {
    if value == 0.0 {
        None
    } else {
        Some((absolute / value).abs())
    }
}

/// Derive the absolute error implied by `relative` at `value`.
pub fn relative_to_absolute(value: f64, relative: f64) -> f64 {
    (value * relative).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_round_trip_is_exact_for_simple_values() {
        assert_eq!(fraction_to_percent(0.05), 5.0);
        assert_eq!(percent_to_fraction(5.0), 0.05);
    }

    #[test]
    fn ppm_scale() {
        assert_eq!(fraction_to_ppm(1e-6), 1.0);
        assert_eq!(ppm_to_fraction(250.0), 2.5e-4);
    }

    #[test]
    fn relative_of_zero_reference_is_unknown() {
        assert_eq!(absolute_to_relative(0.0, 0.5), None);
        assert_eq!(absolute_to_relative(0.0, 0.0), None);
    }

    #[test]
    fn relative_is_normalized_to_magnitude() {
        assert_eq!(absolute_to_relative(-4.0, 1.0), Some(0.25));
        assert_eq!(absolute_to_relative(4.0, -1.0), Some(0.25));
    }

    #[test]
    fn absolute_from_negative_value() {
        assert_eq!(relative_to_absolute(-2.5, 0.028), (2.5f64 * 0.028).abs());
    }
}
