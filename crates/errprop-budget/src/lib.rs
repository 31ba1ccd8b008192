//! Error-budget helpers for errprop.
//!
//! Two layers, both independent of any operator chain:
//!
//! - [`rss`]: free functions that root-sum-square lists of absolute or
//!   percentage errors and convert the total between the two forms.
//! - [`ErrorBudget`]: a named, insertion-ordered table of contributions
//!   to a single nominal value, folded under a [`StrategyKind`].
//!
//! [`StrategyKind`]: errprop_core::StrategyKind

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod budget;
pub mod error;
pub mod rss;

pub use budget::{Contribution, ErrorBudget};
pub use error::BudgetError;
pub use rss::{rss, rss_as_absolute, rss_as_percent, rss_percent};
