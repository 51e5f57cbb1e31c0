//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The type set
//! is fixed (not user-extensible), so pattern matching is preferred over
//! trait objects for better performance and exhaustiveness checking.
//!
//! Dispatch is by operator family first, then by operand kinds:
//! - `&&`, `||`: truthiness selection (see `logical`)
//! - `==`, `!=`, `<=>`: defined for every pair of values
//! - bitwise and shifts: Integer only, no coercion
//! - everything else: numeric, after `coerce`

use std::cmp::Ordering;

use rite_ir::BinaryOp;
use rite_value::{
    coerce, coercion_failed, comparison_failed, divided_by_zero, invalid_binary_op, EvalResult,
    NumericPair, ScalarInt, Value,
};

use crate::logical::{evaluate_and, evaluate_or};

/// Evaluate a binary operation on two evaluated operands.
///
/// `&&` and `||` still select by truthiness here; use `apply_binary` when
/// the right operand has not been evaluated yet.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => evaluate_and(left, || Ok(right)),
        BinaryOp::Or => evaluate_or(left, || Ok(right)),
        BinaryOp::Eq => Ok(Value::Bool(left.equals(&right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(&right))),
        BinaryOp::Cmp => Ok(compare(&left, &right)),
        _ if op.is_bitwise() => eval_bitwise(&left, &right, op),
        _ => eval_numeric(&left, &right, op),
    }
}

// Type-Specific Evaluation Functions

/// Arithmetic and relational operators after coercion.
fn eval_numeric(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match coerce(left, right) {
        Some(NumericPair::Int(a, b)) => eval_int_binary(a, b, op),
        Some(NumericPair::Float(a, b)) => eval_float_binary(a, b, op),
        None => Err(numeric_mismatch(left, right, op)),
    }
}

/// Bitwise operators: both sides must already be Integer.
fn eval_bitwise(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Int(_), other) => Err(coercion_failed(other.type_name(), "Integer")),
        (other, _) => Err(invalid_binary_op(op, other.type_name())),
    }
}

/// Binary operations on integers.
///
/// All arithmetic goes through `ScalarInt`'s named methods: `+ - * **` wrap,
/// `/ %` floor, shifts follow the 32-bit shift policy.
fn eval_int_binary(a: ScalarInt, b: ScalarInt, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
        BinaryOp::Div => a.floor_div(b).map(Value::Int).ok_or_else(divided_by_zero),
        BinaryOp::Mod => a.floor_mod(b).map(Value::Int).ok_or_else(divided_by_zero),
        BinaryOp::Pow => Ok(int_pow(a, b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Shl => Ok(Value::Int(a.shift_left(b))),
        BinaryOp::Shr => Ok(Value::Int(a.shift_right(b))),
        _ => Err(invalid_binary_op(op, "Integer")),
    }
}

/// Binary operations on floats.
///
/// Never fails on values: division by zero yields Infinity or NaN.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::Mod => Ok(Value::Float(float_mod(a, b))),
        BinaryOp::Pow => Ok(Value::Float(a.powf(b))),
        // partial_cmp keeps NaN unordered: every relational test is false
        BinaryOp::Lt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        BinaryOp::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        ))),
        BinaryOp::Gt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        BinaryOp::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        ))),
        _ => Err(invalid_binary_op(op, "Float")),
    }
}

/// Floored float modulo: the result takes the divisor's sign.
fn float_mod(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

/// `Integer ** Integer`. A negative exponent has no integer result, so it
/// falls back to the float power.
fn int_pow(base: ScalarInt, exp: ScalarInt) -> Value {
    match u32::try_from(exp.raw()) {
        Ok(exp) => Value::Int(base.wrapping_pow(exp)),
        Err(_) => Value::Float(f64::from(base).powf(f64::from(exp))),
    }
}

/// `<=>`: `-1`, `0`, `1`, or `nil` when the operands are not comparable.
fn compare(left: &Value, right: &Value) -> Value {
    let ordering = match coerce(left, right) {
        Some(NumericPair::Int(a, b)) => Some(a.cmp(&b)),
        Some(NumericPair::Float(a, b)) => a.partial_cmp(&b),
        // Non-numeric values are only comparable to themselves.
        None if left.equals(right) => Some(Ordering::Equal),
        None => None,
    };
    match ordering {
        Some(Ordering::Less) => Value::int(-1),
        Some(Ordering::Equal) => Value::int(0),
        Some(Ordering::Greater) => Value::int(1),
        None => Value::Nil,
    }
}

/// Pick the error for a numeric operator whose operands did not coerce.
///
/// A numeric receiver rejects its argument; any other receiver does not
/// define the operator at all.
#[cold]
fn numeric_mismatch(left: &Value, right: &Value, op: BinaryOp) -> rite_value::OpError {
    if !left.is_numeric() {
        invalid_binary_op(op, left.type_name())
    } else if op.is_relational() {
        comparison_failed(left.type_name(), right.type_name())
    } else {
        coercion_failed(right.type_name(), left.type_name())
    }
}
