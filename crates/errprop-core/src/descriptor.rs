//! The [`ErrorDescriptor`]: absolute error plus an optional relative error.

use std::fmt;

use crate::convert::{absolute_to_relative, fraction_to_percent, fraction_to_ppm};
use crate::error::PropagationError;

/// Ceiling on a stored relative error (10.0, i.e. 1000%).
///
/// Anything larger almost always means an upstream propagation has run
/// away, so construction rejects it instead of carrying it forward.
pub const MAX_RELATIVE_ERROR: f64 = 10.0;

/// Uncertainty of a value.
///
/// `absolute` is always defined. `relative` is `None` when the reference
/// value it would be derived from is zero; anything that depends on it
/// must treat that as unknown rather than zero. Both fields are stored as
/// magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorDescriptor {
    absolute: f64,
    relative: Option<f64>,
}

impl ErrorDescriptor {
    /// A descriptor with zero absolute and zero relative error.
    pub const ZERO: Self = Self {
        absolute: 0.0,
        relative: Some(0.0),
    };

    /// Build a descriptor from explicit absolute and relative errors.
    ///
    /// Signs are discarded. Fails with
    /// [`InvalidOperand`](PropagationError::InvalidOperand) if the absolute
    /// error is not finite or the relative error is NaN, and with
    /// [`ExcessiveRelativeError`](PropagationError::ExcessiveRelativeError)
    /// if the relative error exceeds [`MAX_RELATIVE_ERROR`].
    pub fn new(absolute: f64, relative: Option<f64>) -> Result<Self, PropagationError> {
        if !absolute.is_finite() {
            return Err(PropagationError::InvalidOperand {
                what: "absolute error",
                value: absolute,
            });
        }
        let relative = match relative {
            Some(r) if r.is_nan() => {
                return Err(PropagationError::InvalidOperand {
                    what: "relative error",
                    value: r,
                });
            }
            Some(r) if r.abs() > MAX_RELATIVE_ERROR => {
                return Err(PropagationError::ExcessiveRelativeError { relative: r.abs() });
            }
            Some(r) => Some(r.abs()),
            None => None,
        };
        Ok(Self {
            absolute: absolute.abs(),
            relative,
        })
    }

    /// Build a descriptor from an absolute error, deriving the relative
    /// error against `reference`.
    ///
    /// A zero `reference` leaves the relative error undefined.
    pub fn from_absolute(reference: f64, absolute: f64) -> Result<Self, PropagationError> {
        Self::new(absolute, absolute_to_relative(reference, absolute))
    }

    /// The absolute error. Always present.
    pub fn absolute(&self) -> f64 {
        self.absolute
    }

    /// The relative error as a fraction, or `None` if undefined.
    pub fn relative(&self) -> Option<f64> {
        self.relative
    }

    /// Whether a relative error is known.
    pub fn has_relative(&self) -> bool {
        self.relative.is_some()
    }

    /// The relative error in percent.
    pub fn percent(&self) -> Result<f64, PropagationError> {
        self.relative
            .map(fraction_to_percent)
            .ok_or(PropagationError::UndefinedRelativeError)
    }

    /// The relative error in parts per million.
    pub fn ppm(&self) -> Result<f64, PropagationError> {
        self.relative
            .map(fraction_to_ppm)
            .ok_or(PropagationError::UndefinedRelativeError)
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{00B1} {:.3} ", self.absolute)?;
        match self.relative {
            Some(r) => write!(f, "[{:.3}%]", fraction_to_percent(r)),
            None => write!(f, "[--%]"),
        }
    }
}
