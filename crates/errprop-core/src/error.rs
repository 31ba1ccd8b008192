//! Error type for uncertainty propagation.
//!
//! Every fallible operation in the core returns [`PropagationError`].
//! Failures are local and synchronous: the operation produces no value
//! and the caller decides whether to retry with corrected inputs.

use std::error::Error;
use std::fmt;

use crate::strategy::StrategyKind;

/// Errors from constructing or combining uncertain values.
#[derive(Clone, Debug, PartialEq)]
pub enum PropagationError {
    /// A value or absolute error is NaN or infinite.
    InvalidOperand {
        /// Which input was rejected (`"value"`, `"absolute error"`, ...).
        what: &'static str,
        /// The rejected input.
        value: f64,
    },
    /// The relative error exceeds [`MAX_RELATIVE_ERROR`](crate::MAX_RELATIVE_ERROR).
    ExcessiveRelativeError {
        /// The offending relative error (as a fraction, not percent).
        relative: f64,
    },
    /// A percent/ppm view or a relative-error construction was requested
    /// but the relative error is undefined (its reference value was zero).
    UndefinedRelativeError,
    /// The divisor's nominal value is exactly zero.
    DivisionByZeroValue,
    /// The operands were built under different propagation strategies.
    IncompatiblePropagationStrategy {
        /// Strategy of the left operand.
        left: StrategyKind,
        /// Strategy of the right operand.
        right: StrategyKind,
    },
    /// A strategy was invoked directly on an operand that belongs to a
    /// different error model.
    TypeMismatch {
        /// Kind of the strategy being invoked.
        expected: StrategyKind,
        /// Kind carried by the operand.
        found: StrategyKind,
    },
    /// The operation is deliberately unsupported by the selected policy.
    NotImplemented {
        /// Name of the unsupported operation.
        operation: &'static str,
    },
    /// The exact-bound divisor interval reaches zero, so the quotient
    /// bound diverges.
    NonConvergentBound {
        /// `|Y| - bx`, which was not strictly positive.
        denominator: f64,
    },
    /// Both operands of a multiplicative operation have an undefined
    /// relative error; there is no rule to combine two unknowns.
    UndefinedPropagation {
        /// Name of the operation.
        operation: &'static str,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand { what, value } => {
                write!(f, "{what} must be a finite number, got {value}")
            }
            Self::ExcessiveRelativeError { relative } => {
                write!(
                    f,
                    "relative error {:.3}% exceeds the {:.0}% ceiling",
                    relative * 100.0,
                    crate::MAX_RELATIVE_ERROR * 100.0
                )
            }
            Self::UndefinedRelativeError => {
                write!(f, "relative error is undefined for a zero reference value")
            }
            Self::DivisionByZeroValue => write!(f, "division by a zero-valued operand"),
            Self::IncompatiblePropagationStrategy { left, right } => {
                write!(f, "incompatible propagation strategies: {left} and {right}")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "{expected} strategy applied to a {found} operand")
            }
            Self::NotImplemented { operation } => {
                write!(f, "{operation} is not implemented")
            }
            Self::NonConvergentBound { denominator } => {
                write!(
                    f,
                    "exact division bound does not converge (|y| - dy = {denominator})"
                )
            }
            Self::UndefinedPropagation { operation } => {
                write!(
                    f,
                    "{operation} of two operands with undefined relative error"
                )
            }
        }
    }
}

impl Error for PropagationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_strategies() {
        let err = PropagationError::IncompatiblePropagationStrategy {
            left: StrategyKind::Statistical,
            right: StrategyKind::WorstCase,
        };
        assert_eq!(
            err.to_string(),
            "incompatible propagation strategies: statistical and worst-case"
        );
    }

    #[test]
    fn display_reports_ceiling_in_percent() {
        let err = PropagationError::ExcessiveRelativeError { relative: 12.5 };
        assert_eq!(
            err.to_string(),
            "relative error 1250.000% exceeds the 1000% ceiling"
        );
    }
}
