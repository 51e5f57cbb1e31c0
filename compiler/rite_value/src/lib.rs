#![deny(clippy::arithmetic_side_effects)]
//! Rite Value - runtime values for the Rite operator core.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `ScalarInt`)
//! - The 32-bit overflow and shift policy (`ScalarInt` methods)
//! - Numeric coercion between Integer and Float (`coerce`, `NumericPair`)
//! - Operator error types (`OpError`, `OpErrorKind`, `ErrorClass`, `EvalResult`)
//!
//! # Architecture
//!
//! `Value` is a closed set of immutable scalars. Integer arithmetic cannot be
//! written with `+` or `-` on `ScalarInt`; it must name a wrapping, floored or
//! shifting method, so the bit-width policy is visible at every call site.

mod coerce;
mod errors;
mod value;

pub use coerce::{coerce, NumericPair};
pub use errors::{
    arity_mismatch, coercion_failed, comparison_failed, divided_by_zero, invalid_binary_op,
    invalid_unary_op, undefined_method, ErrorClass, EvalResult, OpError, OpErrorKind,
};
pub use value::{ScalarInt, Value};
