//! Core types for propagating measurement uncertainty through arithmetic.
//!
//! This is the leaf crate of the workspace. It defines the
//! [`ErrorDescriptor`] (absolute plus optional relative error), the
//! [`UncertainValue`] that pairs a nominal value with its error, and the
//! closed set of [`PropagationStrategy`] variants that decide how errors
//! combine under `+ - * /`.
//!
//! Nothing here holds global state: every value carries its own strategy.
//! Ambient defaults live in `errprop-context`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod strategy;
pub mod value;

pub use descriptor::{ErrorDescriptor, MAX_RELATIVE_ERROR};
pub use error::PropagationError;
pub use strategy::{ExtremeDivision, PropagationStrategy, StrategyKind};
pub use value::UncertainValue;
