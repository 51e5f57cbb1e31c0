//! Short-circuit `&&` and `||`.
//!
//! Both operators return one of their operands unchanged, never a coerced
//! boolean: `nil && false` is `nil`, `false || 2` is `2`. The right operand
//! arrives as a closure and is called only when the left operand does not
//! decide the result, so side effects in a skipped branch never happen.

use rite_value::Value;

/// `left && right`: `left` if it is falsy, otherwise the value of `right`.
pub fn evaluate_and<F, E>(left: Value, right: F) -> Result<Value, E>
where
    F: FnOnce() -> Result<Value, E>,
{
    if left.is_truthy() {
        right()
    } else {
        tracing::trace!(%left, "&& short-circuited");
        Ok(left)
    }
}

/// `left || right`: `left` if it is truthy, otherwise the value of `right`.
pub fn evaluate_or<F, E>(left: Value, right: F) -> Result<Value, E>
where
    F: FnOnce() -> Result<Value, E>,
{
    if left.is_truthy() {
        tracing::trace!(%left, "|| short-circuited");
        Ok(left)
    } else {
        right()
    }
}
