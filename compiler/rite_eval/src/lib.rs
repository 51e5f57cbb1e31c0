#![deny(clippy::arithmetic_side_effects)]
//! Rite Eval - operator evaluation core for the Rite runtime.
//!
//! The surrounding evaluator resolves an expression node to an operator and
//! its operands and calls into this crate. Evaluation is pure and
//! synchronous: no operand is mutated, no state survives the call.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `apply_unary` / `apply_binary`: entry points for operator syntax
//! - `apply_method`: entry point for operators called by selector (`1.+(2)`)
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `evaluate_and` / `evaluate_or`: short-circuit selection with a lazy
//!   right operand
//! - `Value` types from `rite_value`
//!
//! # Re-exports
//!
//! This crate re-exports the value and error types from `rite_value` and
//! the operator tokens from `rite_ir` for convenience.

mod logical;
mod method_dispatch;
mod operators;
mod unary_operators;

use std::sync::Once;

pub use rite_ir::{BinaryOp, Operator, UnaryOp};
pub use rite_value::{
    coerce, ErrorClass, EvalResult, NumericPair, OpError, OpErrorKind, ScalarInt, Value,
};

pub use logical::{evaluate_and, evaluate_or};
pub use method_dispatch::apply_method;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

/// Apply a unary operator.
#[tracing::instrument(level = "trace", skip_all, fields(op = op.method_name()))]
pub fn apply_unary(op: UnaryOp, operand: Value) -> EvalResult {
    evaluate_unary(operand, op).inspect_err(|err| {
        tracing::debug!(%operand, %err, "unary operator failed");
    })
}

/// Apply a binary operator whose right operand has not been evaluated yet.
///
/// `right` is called at most once. For `&&` and `||` it is called only when
/// the left operand does not decide the result; for every other operator it
/// is called before dispatch, and its error is returned unchanged.
#[tracing::instrument(level = "trace", skip_all, fields(op = op.as_symbol()))]
pub fn apply_binary<F, E>(op: BinaryOp, left: Value, right: F) -> Result<Value, E>
where
    F: FnOnce() -> Result<Value, E>,
    E: From<OpError>,
{
    match op {
        BinaryOp::And => evaluate_and(left, right),
        BinaryOp::Or => evaluate_or(left, right),
        _ => {
            let right = right()?;
            evaluate_binary(left, right, op).map_err(|err| {
                tracing::debug!(%left, %right, %err, "binary operator failed");
                E::from(err)
            })
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rite_eval=debug` or `RUST_LOG=rite_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
