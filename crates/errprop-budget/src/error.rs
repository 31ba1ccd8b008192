//! Error type for budget calculations.

use std::error::Error;
use std::fmt;

use errprop_core::PropagationError;

/// Errors from [`rss`](crate::rss) helpers and [`ErrorBudget`](crate::ErrorBudget).
#[derive(Clone, Debug, PartialEq)]
pub enum BudgetError {
    /// A value used as a relative-error reference is zero.
    ZeroReference {
        /// Which reference was zero.
        what: &'static str,
    },
    /// A contribution with this name is already in the budget.
    DuplicateTerm {
        /// The repeated name.
        name: String,
    },
    /// A contribution is NaN or infinite.
    InvalidContribution {
        /// Name of the contribution.
        name: String,
        /// The rejected magnitude.
        value: f64,
    },
    /// Building the resulting uncertain value failed.
    Propagation(PropagationError),
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroReference { what } => write!(f, "{what} is zero; relative error undefined"),
            Self::DuplicateTerm { name } => write!(f, "duplicate budget term '{name}'"),
            Self::InvalidContribution { name, value } => {
                write!(f, "budget term '{name}' is not finite: {value}")
            }
            Self::Propagation(e) => write!(f, "propagation: {e}"),
        }
    }
}

impl Error for BudgetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Propagation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PropagationError> for BudgetError {
    fn from(e: PropagationError) -> Self {
        Self::Propagation(e)
    }
}
