//! [`UncertainValue`]: a nominal value, its error, and the strategy that
//! propagates that error through arithmetic.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::convert::{absolute_to_relative, relative_to_absolute};
use crate::descriptor::ErrorDescriptor;
use crate::error::PropagationError;
use crate::strategy::PropagationStrategy;

/// A measured or derived quantity with uncertainty.
///
/// Immutable: every operation returns a new value. The result of a binary
/// operation carries the left operand's strategy.
///
/// # Examples
///
/// ```
/// use errprop_core::{PropagationStrategy, UncertainValue};
///
/// let s = PropagationStrategy::WorstCase;
/// let x = UncertainValue::from_absolute(2.0, 0.1, s).unwrap();
/// let y = UncertainValue::from_absolute(5.0, 0.2, s).unwrap();
///
/// let q = x.mul(&y).unwrap();
/// assert_eq!(q.value(), 10.0);
/// assert!((q.error().absolute() - 0.9).abs() < 1e-12);
/// assert_eq!(q.to_string(), "10.000 \u{00B1} 0.900 [9.000%]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UncertainValue {
    value: f64,
    error: ErrorDescriptor,
    strategy: PropagationStrategy,
}

impl UncertainValue {
    /// Build a value from explicit absolute and relative errors.
    ///
    /// Fails with [`InvalidOperand`](PropagationError::InvalidOperand) if
    /// `value` or `absolute` is not finite, and with
    /// [`ExcessiveRelativeError`](PropagationError::ExcessiveRelativeError)
    /// if `relative` exceeds [`MAX_RELATIVE_ERROR`](crate::MAX_RELATIVE_ERROR).
    pub fn new(
        value: f64,
        absolute: f64,
        relative: Option<f64>,
        strategy: PropagationStrategy,
    ) -> Result<Self, PropagationError> {
        let value = finite(value)?;
        Ok(Self {
            value,
            error: ErrorDescriptor::new(absolute, relative)?,
            strategy,
        })
    }

    /// Build a value from an absolute error; the relative error is
    /// `|absolute / value|`, undefined when `value` is zero.
    pub fn from_absolute(
        value: f64,
        absolute: f64,
        strategy: PropagationStrategy,
    ) -> Result<Self, PropagationError> {
        let value = finite(value)?;
        Self::new(value, absolute, absolute_to_relative(value, absolute), strategy)
    }

    /// Build a value from a relative error (a fraction, not percent); the
    /// absolute error is `|value * relative|`.
    ///
    /// Fails with
    /// [`UndefinedRelativeError`](PropagationError::UndefinedRelativeError)
    /// if `relative` is `None`.
    pub fn from_relative(
        value: f64,
        relative: Option<f64>,
        strategy: PropagationStrategy,
    ) -> Result<Self, PropagationError> {
        let relative = relative.ok_or(PropagationError::UndefinedRelativeError)?;
        let value = finite(value)?;
        Self::new(
            value,
            relative_to_absolute(value, relative),
            Some(relative),
            strategy,
        )
    }

    /// A value with no uncertainty.
    pub fn exact(value: f64, strategy: PropagationStrategy) -> Result<Self, PropagationError> {
        Self::from_absolute(value, 0.0, strategy)
    }

    /// The nominal value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The uncertainty.
    pub fn error(&self) -> &ErrorDescriptor {
        &self.error
    }

    /// The propagation strategy.
    pub fn strategy(&self) -> PropagationStrategy {
        self.strategy
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self, PropagationError> {
        self.ensure_compatible(rhs)?;
        let value = self.value + rhs.value;
        let absolute = self.strategy.propagate_add(value, self, rhs)?;
        self.derive(value, absolute, value, true)
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Result<Self, PropagationError> {
        self.ensure_compatible(rhs)?;
        let value = self.value - rhs.value;
        let absolute = self.strategy.propagate_sub(value, self, rhs)?;
        self.derive(value, absolute, value, true)
    }

    /// `self * rhs`.
    ///
    /// If the product is exactly zero, `max(self, rhs)` serves as the
    /// reference for the result's relative error. That reference is itself
    /// zero when the larger operand is zero (e.g. `0 * -5`), in which case
    /// the result's relative error is undefined even though both operands'
    /// were known. If either operand's relative error is undefined, so is
    /// the result's.
    pub fn mul(&self, rhs: &Self) -> Result<Self, PropagationError> {
        self.ensure_compatible(rhs)?;
        let value = self.value * rhs.value;
        let absolute = self.strategy.propagate_mul(value, self, rhs)?;
        let reference = if value == 0.0 {
            self.value.max(rhs.value)
        } else {
            value
        };
        self.derive(value, absolute, reference, self.knows_relative_with(rhs))
    }

    /// `self / rhs`.
    ///
    /// Fails with [`DivisionByZeroValue`](PropagationError::DivisionByZeroValue)
    /// if `rhs` has a zero nominal value. A zero quotient takes the divisor
    /// as its relative-error reference.
    pub fn div(&self, rhs: &Self) -> Result<Self, PropagationError> {
        self.ensure_compatible(rhs)?;
        if rhs.value == 0.0 {
            return Err(PropagationError::DivisionByZeroValue);
        }
        let value = self.value / rhs.value;
        let absolute = self.strategy.propagate_div(value, self, rhs)?;
        let reference = if value == 0.0 { rhs.value } else { value };
        self.derive(value, absolute, reference, self.knows_relative_with(rhs))
    }

    /// `-self`. The error is unchanged.
    pub fn negate(&self) -> Self {
        Self {
            value: -self.value,
            ..*self
        }
    }

    fn ensure_compatible(&self, rhs: &Self) -> Result<(), PropagationError> {
        if self.strategy.is_compatible(&rhs.strategy) {
            Ok(())
        } else {
            Err(PropagationError::IncompatiblePropagationStrategy {
                left: self.strategy.kind(),
                right: rhs.strategy.kind(),
            })
        }
    }

    fn knows_relative_with(&self, rhs: &Self) -> bool {
        self.error.has_relative() && rhs.error.has_relative()
    }

    fn derive(
        &self,
        value: f64,
        absolute: f64,
        reference: f64,
        relative_known: bool,
    ) -> Result<Self, PropagationError> {
        let relative = if relative_known {
            absolute_to_relative(reference, absolute)
        } else {
            None
        };
        Self::new(value, absolute, relative, self.strategy)
    }
}

fn finite(value: f64) -> Result<f64, PropagationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropagationError::InvalidOperand {
            what: "value",
            value,
        })
    }
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.value, self.error)
    }
}

// ── Operator sugar ──────────────────────────────────────────────────

impl Add for &UncertainValue {
    type Output = Result<UncertainValue, PropagationError>;

    fn add(self, rhs: Self) -> Self::Output {
        UncertainValue::add(self, rhs)
    }
}

impl Sub for &UncertainValue {
    type Output = Result<UncertainValue, PropagationError>;

    fn sub(self, rhs: Self) -> Self::Output {
        UncertainValue::sub(self, rhs)
    }
}

impl Mul for &UncertainValue {
    type Output = Result<UncertainValue, PropagationError>;

    fn mul(self, rhs: Self) -> Self::Output {
        UncertainValue::mul(self, rhs)
    }
}

impl Div for &UncertainValue {
    type Output = Result<UncertainValue, PropagationError>;

    fn div(self, rhs: Self) -> Self::Output {
        UncertainValue::div(self, rhs)
    }
}

impl Neg for UncertainValue {
    type Output = UncertainValue;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &UncertainValue {
    type Output = UncertainValue;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
