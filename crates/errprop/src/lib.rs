//! errprop: propagation of measurement uncertainty through arithmetic.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all errprop sub-crates. For most users, adding `errprop` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use errprop::prelude::*;
//!
//! let s = PropagationStrategy::Statistical;
//! let a = UncertainValue::from_absolute(10.0, 3.0, s).unwrap();
//! let b = UncertainValue::from_absolute(20.0, 4.0, s).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.value(), 30.0);
//! assert_eq!(sum.error().absolute(), 5.0);
//!
//! // Values built under different strategies never mix.
//! let w = UncertainValue::from_absolute(1.0, 0.1, PropagationStrategy::WorstCase).unwrap();
//! assert!(matches!(
//!     a.mul(&w),
//!     Err(PropagationError::IncompatiblePropagationStrategy { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `errprop-core` | `UncertainValue`, `ErrorDescriptor`, strategies, errors |
//! | [`context`] | `errprop-context` | Process-wide default strategy and its configuration |
//! | [`budget`] | `errprop-budget` | RSS helpers and named error budgets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Uncertain values and propagation strategies (`errprop-core`).
pub use errprop_core as core;

/// Default strategy, scoped overrides and configuration (`errprop-context`).
pub use errprop_context as context;

/// Error-budget helpers (`errprop-budget`).
pub use errprop_budget as budget;

/// Common imports for typical errprop usage.
///
/// ```rust
/// use errprop::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use errprop_core::{
        ErrorDescriptor, ExtremeDivision, PropagationError, PropagationStrategy, StrategyKind,
        UncertainValue,
    };

    // Default strategy
    pub use errprop_context::{
        default_strategy, measured, override_default, set_default_strategy, toleranced,
        with_strategy, ContextConfig,
    };

    // Budgets
    pub use errprop_budget::{ErrorBudget, rss};
}
