//! Propagation strategies: the rules for combining two operands' errors.
//!
//! The set of strategies is closed. [`PropagationStrategy`] is a plain
//! enum dispatched with exhaustive `match`, and compatibility between two
//! strategies is decided by their [`StrategyKind`] tag alone.
//!
//! Notation used below: `X, Y` are the left/right nominal values, `ax, bx`
//! their absolute errors, `ar, br` their relative errors and `Q` the
//! nominal result.
//!
//! | Operator | Statistical | WorstCase | Extreme |
//! |----------|-------------|-----------|---------|
//! | add/sub  | `sqrt(ax² + bx²)` | `ax + bx` | `ax + bx` |
//! | mul      | `\|Q\|·sqrt(ar² + br²)` | `\|Q\|·(ar + br)` | `\|Q\|·(ar + br + ar·br)` |
//! | div      | as mul | as mul | `(\|X\| + ax)/(\|Y\| - bx) - \|Q\|` |

use std::fmt;

use tracing::debug;

use crate::error::PropagationError;
use crate::value::UncertainValue;

/// Tag identifying a strategy variant, independent of its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Root-sum-square combination of independent errors.
    Statistical,
    /// Linear combination; errors may align adversarially.
    WorstCase,
    /// Exact bound, including the multiplicative cross term.
    Extreme,
}

impl StrategyKind {
    /// Every kind, in increasing order of conservativeness.
    pub const ALL: [StrategyKind; 3] = [Self::Statistical, Self::WorstCase, Self::Extreme];

    /// Stable lowercase name, used for display and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statistical => "statistical",
            Self::WorstCase => "worst-case",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the [`Extreme`](PropagationStrategy::Extreme) strategy handles
/// division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtremeDivision {
    /// Upper bound of the quotient interval:
    /// `(|X| + ax) / (|Y| - bx) - |Q|`.
    #[default]
    UpperBound,
    /// Division is rejected with
    /// [`NotImplemented`](PropagationError::NotImplemented).
    Unsupported,
}

impl ExtremeDivision {
    /// Stable lowercase name, used for configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpperBound => "upper-bound",
            Self::Unsupported => "unsupported",
        }
    }
}

/// A stateless rule set for propagating errors through arithmetic.
///
/// Values are cheap to copy and carried by every
/// [`UncertainValue`]. Two strategies are compatible iff they are the
/// same variant; the `division` policy of `Extreme` does not take part in
/// the comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropagationStrategy {
    /// Root-sum-square (RSS) propagation.
    Statistical,
    /// Linear, worst-case propagation.
    WorstCase,
    /// Exact-bound propagation.
    Extreme {
        /// Division policy.
        division: ExtremeDivision,
    },
}

impl PropagationStrategy {
    /// `Extreme` with the default division policy.
    pub const EXTREME: Self = Self::Extreme {
        division: ExtremeDivision::UpperBound,
    };

    /// The default strategy for a kind.
    pub fn for_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Statistical => Self::Statistical,
            StrategyKind::WorstCase => Self::WorstCase,
            StrategyKind::Extreme => Self::EXTREME,
        }
    }

    /// The variant tag.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Statistical => StrategyKind::Statistical,
            Self::WorstCase => StrategyKind::WorstCase,
            Self::Extreme { .. } => StrategyKind::Extreme,
        }
    }

    /// Whether values under `other` may be combined with values under
    /// `self`.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }

    /// New absolute error of `left + right`.
    pub fn propagate_add(
        &self,
        _result: f64,
        left: &UncertainValue,
        right: &UncertainValue,
    ) -> Result<f64, PropagationError> {
        self.check_operands(left, right)?;
        Ok(self.combine_absolute(left.error().absolute(), right.error().absolute()))
    }

    /// New absolute error of `left - right`.
    ///
    /// Identical to addition: the magnitude of an error does not depend on
    /// the sign of the operand.
    pub fn propagate_sub(
        &self,
        result: f64,
        left: &UncertainValue,
        right: &UncertainValue,
    ) -> Result<f64, PropagationError> {
        self.propagate_add(result, left, right)
    }

    /// New absolute error of `left * right`.
    ///
    /// If exactly one operand has an undefined relative error, the result
    /// is that operand's absolute error scaled by the other operand's
    /// magnitude. If both are undefined, fails with
    /// [`UndefinedPropagation`](PropagationError::UndefinedPropagation).
    pub fn propagate_mul(
        &self,
        result: f64,
        left: &UncertainValue,
        right: &UncertainValue,
    ) -> Result<f64, PropagationError> {
        self.check_operands(left, right)?;
        match (left.error().relative(), right.error().relative()) {
            (Some(ar), Some(br)) => Ok(result.abs() * self.combine_relative(ar, br)),
            (None, Some(_)) => {
                debug!(strategy = %self.kind(), "left relative error unknown in multiplication");
                Ok(left.error().absolute() * right.value().abs())
            }
            (Some(_), None) => {
                debug!(strategy = %self.kind(), "right relative error unknown in multiplication");
                Ok(right.error().absolute() * left.value().abs())
            }
            (None, None) => Err(PropagationError::UndefinedPropagation {
                operation: "multiplication",
            }),
        }
    }

    /// New absolute error of `left / right`.
    ///
    /// Fails with [`DivisionByZeroValue`](PropagationError::DivisionByZeroValue)
    /// when `right` has a zero nominal value. For `Extreme`, the division
    /// policy decides between the exact upper bound and
    /// [`NotImplemented`](PropagationError::NotImplemented); the upper
    /// bound fails with
    /// [`NonConvergentBound`](PropagationError::NonConvergentBound) whenever
    /// the divisor interval reaches zero, whatever the dividend.
    pub fn propagate_div(
        &self,
        result: f64,
        left: &UncertainValue,
        right: &UncertainValue,
    ) -> Result<f64, PropagationError> {
        self.check_operands(left, right)?;
        if right.value() == 0.0 {
            return Err(PropagationError::DivisionByZeroValue);
        }
        let denominator = match self {
            Self::Extreme {
                division: ExtremeDivision::Unsupported,
            } => {
                return Err(PropagationError::NotImplemented {
                    operation: "extreme-bound division",
                });
            }
            Self::Extreme {
                division: ExtremeDivision::UpperBound,
            } => {
                let denominator = right.value().abs() - right.error().absolute();
                if denominator <= 0.0 {
                    return Err(PropagationError::NonConvergentBound { denominator });
                }
                denominator
            }
            Self::Statistical | Self::WorstCase => 0.0,
        };

        let (ar, br) = match (left.error().relative(), right.error().relative()) {
            (Some(ar), Some(br)) => (ar, br),
            (None, Some(_)) => {
                debug!(strategy = %self.kind(), "dividend relative error unknown in division");
                return Ok(left.error().absolute() / right.value().abs());
            }
            // A divisor with an undefined relative error has a zero value,
            // which was rejected above; only explicit construction gets here.
            (Some(_), None) => {
                debug!(strategy = %self.kind(), "divisor relative error unknown in division");
                return Ok(right.error().absolute() * (result / right.value()).abs());
            }
            (None, None) => {
                return Err(PropagationError::UndefinedPropagation {
                    operation: "division",
                });
            }
        };

        match self {
            Self::Statistical | Self::WorstCase => {
                Ok(result.abs() * self.combine_relative(ar, br))
            }
            Self::Extreme { .. } => {
                Ok((left.value().abs() + left.error().absolute()) / denominator - result.abs())
            }
        }
    }

    fn check_operands(
        &self,
        left: &UncertainValue,
        right: &UncertainValue,
    ) -> Result<(), PropagationError> {
        for operand in [left, right] {
            let found = operand.strategy().kind();
            if found != self.kind() {
                return Err(PropagationError::TypeMismatch {
                    expected: self.kind(),
                    found,
                });
            }
        }
        Ok(())
    }

    fn combine_absolute(&self, ax: f64, bx: f64) -> f64 {
        match self {
            Self::Statistical => ax.hypot(bx),
            Self::WorstCase | Self::Extreme { .. } => ax + bx,
        }
    }

    fn combine_relative(&self, ar: f64, br: f64) -> f64 {
        match self {
            Self::Statistical => ar.hypot(br),
            Self::WorstCase => ar + br,
            Self::Extreme { .. } => ar + br + ar * br,
        }
    }
}

impl fmt::Display for PropagationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extreme {
                division: ExtremeDivision::Unsupported,
            } => write!(f, "extreme (no division)"),
            _ => f.write_str(self.kind().as_str()),
        }
    }
}
