//! Named error budgets.
//!
//! An [`ErrorBudget`] lists the independent contributions to the error of
//! one nominal value (supply tolerance, temperature drift, resistor
//! tolerance, ...) in the order they were added, and folds them into a
//! total under a chosen [`StrategyKind`].

use indexmap::IndexMap;
use tracing::debug;

use errprop_core::convert::{absolute_to_relative, percent_to_fraction, relative_to_absolute};
use errprop_core::{PropagationStrategy, StrategyKind, UncertainValue};

use crate::error::BudgetError;
use crate::rss::rss;

/// One line of an [`ErrorBudget`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contribution {
    /// An absolute error, in the unit of the nominal value.
    Absolute(f64),
    /// A relative error as a fraction of the nominal value.
    Relative(f64),
}

impl Contribution {
    /// Absolute magnitude of this contribution at `nominal`.
    pub fn absolute_at(&self, nominal: f64) -> f64 {
        match *self {
            Self::Absolute(a) => a.abs(),
            Self::Relative(r) => relative_to_absolute(nominal, r),
        }
    }
}

/// Insertion-ordered table of named error contributions to `nominal`.
///
/// # Examples
///
/// ```
/// use errprop_budget::ErrorBudget;
/// use errprop_core::StrategyKind;
///
/// let mut budget = ErrorBudget::new(3.24);
/// budget.add_percent("supply", 2.0).unwrap();
/// budget.add_percent("temperature", 5.0).unwrap();
///
/// let rss = budget.total(StrategyKind::Statistical);
/// let linear = budget.total(StrategyKind::WorstCase);
/// assert!(rss < linear);
/// assert_eq!(budget.dominant().unwrap().0, "temperature");
/// ```
#[derive(Clone, Debug)]
pub struct ErrorBudget {
    nominal: f64,
    terms: IndexMap<String, Contribution>,
}

impl ErrorBudget {
    /// An empty budget for `nominal`.
    pub fn new(nominal: f64) -> Self {
        Self {
            nominal,
            terms: IndexMap::new(),
        }
    }

    /// The nominal value the budget is about.
    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    /// Number of contributions.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the budget has no contributions.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Add a named contribution.
    ///
    /// Fails with [`BudgetError::DuplicateTerm`] if the name is taken and
    /// with [`BudgetError::InvalidContribution`] if the magnitude is not
    /// finite.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        contribution: Contribution,
    ) -> Result<&mut Self, BudgetError> {
        let name = name.into();
        let magnitude = match contribution {
            Contribution::Absolute(v) | Contribution::Relative(v) => v,
        };
        if !magnitude.is_finite() {
            return Err(BudgetError::InvalidContribution {
                name,
                value: magnitude,
            });
        }
        if self.terms.contains_key(&name) {
            return Err(BudgetError::DuplicateTerm { name });
        }
        self.terms.insert(name, contribution);
        Ok(self)
    }

    /// Add an absolute contribution.
    pub fn add_absolute(
        &mut self,
        name: impl Into<String>,
        absolute: f64,
    ) -> Result<&mut Self, BudgetError> {
        self.add(name, Contribution::Absolute(absolute))
    }

    /// Add a contribution given in percent of the nominal value.
    pub fn add_percent(
        &mut self,
        name: impl Into<String>,
        percent: f64,
    ) -> Result<&mut Self, BudgetError> {
        self.add(name, Contribution::Relative(percent_to_fraction(percent)))
    }

    /// Add the absolute error of an existing uncertain value.
    pub fn add_value(
        &mut self,
        name: impl Into<String>,
        value: &UncertainValue,
    ) -> Result<&mut Self, BudgetError> {
        self.add(name, Contribution::Absolute(value.error().absolute()))
    }

    /// The named contribution, if present.
    pub fn get(&self, name: &str) -> Option<Contribution> {
        self.terms.get(name).copied()
    }

    /// Each contribution's absolute magnitude, in insertion order.
    pub fn absolute_terms(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.terms
            .iter()
            .map(|(name, c)| (name.as_str(), c.absolute_at(self.nominal)))
    }

    /// Fold all contributions into one absolute error.
    ///
    /// `Statistical` takes the root-sum-square; `WorstCase` and `Extreme`
    /// take the linear sum, as they do for addition.
    pub fn total(&self, kind: StrategyKind) -> f64 {
        let magnitudes = self.absolute_terms().map(|(_, a)| a);
        let total = match kind {
            StrategyKind::Statistical => rss(magnitudes),
            StrategyKind::WorstCase | StrategyKind::Extreme => magnitudes.sum::<f64>(),
        };
        debug!(%kind, terms = self.terms.len(), total, "folded error budget");
        total
    }

    /// [`total`](Self::total) relative to the nominal value, `None` if the
    /// nominal value is zero.
    pub fn relative_total(&self, kind: StrategyKind) -> Option<f64> {
        absolute_to_relative(self.nominal, self.total(kind))
    }

    /// The contribution with the largest absolute magnitude.
    ///
    /// Ties resolve to the earliest entry.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, a) in self.absolute_terms() {
            match best {
                Some((_, b)) if b >= a => {}
                _ => best = Some((name, a)),
            }
        }
        best
    }

    /// Package the nominal value and the folded total as an
    /// [`UncertainValue`] under `strategy`.
    pub fn to_uncertain(
        &self,
        strategy: PropagationStrategy,
    ) -> Result<UncertainValue, BudgetError> {
        let absolute = self.total(strategy.kind());
        Ok(UncertainValue::from_absolute(
            self.nominal,
            absolute,
            strategy,
        )?)
    }
}
