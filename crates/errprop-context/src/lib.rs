//! Ambient default propagation strategy for errprop.
//!
//! The core never assumes a strategy: every [`UncertainValue`] carries
//! its own. This crate adds the convenience layer on top:
//!
//! - a process-wide default strategy ([`default_strategy`],
//!   [`set_default_strategy`]),
//! - scoped overrides that restore the previous default on every exit
//!   path ([`override_default`], [`with_strategy`]),
//! - constructors that pick up the default ([`measured`], [`toleranced`]),
//! - [`ContextConfig`], which reads the default from the environment.
//!
//! [`UncertainValue`]: errprop_core::UncertainValue

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod default;

pub use config::{
    parse_extreme_division, parse_strategy_kind, ConfigError, ContextConfig,
    EXTREME_DIVISION_ENV, STRATEGY_ENV,
};
pub use default::{
    default_strategy, measured, override_default, set_default_strategy, toleranced,
    with_strategy, StrategyOverride,
};
