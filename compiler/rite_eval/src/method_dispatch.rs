//! Operators called as methods.
//!
//! `1.+(2)`, `a.send(:<<, 3)` and `x.-@` reach the core as a receiver, a
//! method selector and an argument list. The selector is resolved to an
//! operator token and evaluated through the same dispatch as the operator
//! syntax, so both forms always agree.

use rite_ir::Operator;
use rite_value::{arity_mismatch, undefined_method, EvalResult, Value};

use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;

/// Evaluate `receiver.selector(*args)` for an operator selector.
pub fn apply_method(receiver: Value, selector: &str, args: &[Value]) -> EvalResult {
    let Some(op) = Operator::from_method_name(selector) else {
        return Err(undefined_method(selector, receiver.type_name()));
    };
    match (op, args) {
        (Operator::Unary(op), []) => evaluate_unary(receiver, op),
        (Operator::Binary(op), [arg]) => evaluate_binary(receiver, *arg, op),
        (op, _) => Err(arity_mismatch(selector, op.arity(), args.len())),
    }
}
