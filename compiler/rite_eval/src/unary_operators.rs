//! Unary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for unary operations. The type set
//! is fixed (not user-extensible), so pattern matching is preferred over
//! trait objects for better performance and exhaustiveness checking.

use rite_ir::UnaryOp;
use rite_value::{invalid_unary_op, EvalResult, Value};

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        // Logical not is defined on every value
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),

        // Numeric identity
        (Value::Int(_) | Value::Float(_), UnaryOp::Plus) => Ok(value),

        // Numeric negation (Integer wraps: -MIN == MIN)
        (Value::Int(n), UnaryOp::Neg) => Ok(Value::Int(n.wrapping_neg())),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),

        // Bitwise not
        (Value::Int(n), UnaryOp::BitNot) => Ok(Value::Int(!n)),

        // Invalid combinations
        _ => Err(invalid_unary_op(op, value.type_name())),
    }
}
