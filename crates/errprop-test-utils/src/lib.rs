//! Test utilities for errprop development.
//!
//! - [`fixtures`]: the three built-in strategies and operand constructors.
//! - [`sampler`]: a seeded random-measurement generator for trial loops
//!   and benchmarks.
//! - [`arb`]: `proptest` strategies for measurements and propagation
//!   strategies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arb;
pub mod fixtures;
pub mod sampler;

pub use fixtures::{measurement, operand_pairs, ALL_STRATEGIES};
pub use sampler::MeasurementSampler;

/// `a <= b`, allowing rounding slack of `1e-12 * scale`.
///
/// Two closed forms that are equal (or ordered) in exact arithmetic can
/// round to the wrong side of each other in `f64`; `scale` should be the
/// magnitude of the largest intermediate involved.
pub fn le_with_rounding(a: f64, b: f64, scale: f64) -> bool {
    a <= b + scale.abs() * 1e-12
}

/// `|a - b|` is within `1e-9` relative to the larger magnitude.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}
