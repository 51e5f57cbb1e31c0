//! Numeric coercion for arithmetic and comparison operators.
//!
//! Before `+`, `-`, `*`, `/`, `%`, `**`, `<`, `<=`, `>`, `>=` and `<=>` run,
//! both operands are brought to a common representation:
//!
//! | left    | right   | pair                 |
//! |---------|---------|----------------------|
//! | Integer | Integer | `NumericPair::Int`   |
//! | Integer | Float   | `NumericPair::Float` |
//! | Float   | Integer | `NumericPair::Float` |
//! | Float   | Float   | `NumericPair::Float` |
//!
//! Any other combination has no common representation. Bitwise and shift
//! operators never coerce: they require two Integers as given.

use crate::value::{ScalarInt, Value};

/// Operands promoted to a common numeric representation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumericPair {
    Int(ScalarInt, ScalarInt),
    Float(f64, f64),
}

/// Promote an operand pair for arithmetic or comparison.
///
/// Returns `None` when either side is not numeric; the caller decides which
/// error that is for its operator.
pub fn coerce(left: &Value, right: &Value) -> Option<NumericPair> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(NumericPair::Int(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumericPair::Float(f64::from(*a), *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumericPair::Float(*a, f64::from(*b))),
        (Value::Float(a), Value::Float(b)) => Some(NumericPair::Float(*a, *b)),
        _ => {
            tracing::trace!(
                left = left.type_name(),
                right = right.type_name(),
                "no numeric coercion"
            );
            None
        }
    }
}
