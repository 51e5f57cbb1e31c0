//! Error types for operator evaluation.
//!
//! Operator failures are values, never panics: the surrounding evaluator
//! decides whether an `OpError` becomes a language-level exception or aborts
//! the script.
//!
//! # Structured Error Categories
//!
//! `OpErrorKind` carries the structured detail. Every kind belongs to one
//! exception class (`ErrorClass`), which is what scripts can `rescue`.
//! Factory functions (e.g., `divided_by_zero()`) are the construction API.

use crate::value::Value;
use rite_ir::{BinaryOp, UnaryOp};
use std::fmt;

/// Result of evaluating an operator.
pub type EvalResult = Result<Value, OpError>;

/// Exception class an operator failure is raised as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Operand kind incompatible with the operator.
    TypeError,
    /// Integer `/` or `%` by zero.
    ZeroDivisionError,
}

impl ErrorClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeError => "TypeError",
            Self::ZeroDivisionError => "ZeroDivisionError",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error category for operator failures.
///
/// Each variant carries the data needed to render the message, so callers
/// can match on the failure instead of parsing strings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OpErrorKind {
    // Arithmetic
    #[error("divided by 0")]
    DivisionByZero,

    // Type/Operator
    #[error("undefined operator '{}' for {type_name}", .op.method_name())]
    InvalidUnaryOp {
        type_name: &'static str,
        op: UnaryOp,
    },
    #[error("undefined operator '{}' for {type_name}", .op.as_symbol())]
    InvalidBinaryOp {
        type_name: &'static str,
        op: BinaryOp,
    },
    #[error("{from} can't be coerced into {into}")]
    CoercionFailed {
        from: &'static str,
        into: &'static str,
    },
    #[error("comparison of {left} with {right} failed")]
    ComparisonFailed {
        left: &'static str,
        right: &'static str,
    },

    // Method selector
    #[error("undefined method '{selector}' for {type_name}")]
    UndefinedMethod {
        selector: String,
        type_name: &'static str,
    },
    #[error("wrong number of arguments to '{selector}' (given {got}, expected {expected})")]
    ArityMismatch {
        selector: String,
        expected: usize,
        got: usize,
    },
}

impl OpErrorKind {
    /// The exception class this failure is raised as.
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::DivisionByZero => ErrorClass::ZeroDivisionError,
            Self::InvalidUnaryOp { .. }
            | Self::InvalidBinaryOp { .. }
            | Self::CoercionFailed { .. }
            | Self::ComparisonFailed { .. }
            | Self::UndefinedMethod { .. }
            | Self::ArityMismatch { .. } => ErrorClass::TypeError,
        }
    }
}

/// Operator evaluation error.
///
/// Displays as `message (Class)`, e.g. `divided by 0 (ZeroDivisionError)`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} ({})", .kind, .kind.class())]
pub struct OpError {
    /// Structured error category.
    pub kind: OpErrorKind,
}

impl OpError {
    fn from_kind(kind: OpErrorKind) -> Self {
        Self { kind }
    }

    /// The exception class this error is raised as.
    #[inline]
    pub const fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Human-readable message without the class suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<OpErrorKind> for OpError {
    fn from(kind: OpErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Arithmetic Errors

/// Integer division or modulo by zero.
#[cold]
pub fn divided_by_zero() -> OpError {
    OpError::from_kind(OpErrorKind::DivisionByZero)
}

// Operator/Type Errors

/// Unary operator not defined for the operand's type.
#[cold]
pub fn invalid_unary_op(op: UnaryOp, type_name: &'static str) -> OpError {
    OpError::from_kind(OpErrorKind::InvalidUnaryOp { type_name, op })
}

/// Binary operator not defined for the receiver's type.
#[cold]
pub fn invalid_binary_op(op: BinaryOp, type_name: &'static str) -> OpError {
    OpError::from_kind(OpErrorKind::InvalidBinaryOp { type_name, op })
}

/// Argument cannot be converted to the receiver's numeric type.
#[cold]
pub fn coercion_failed(from: &'static str, into: &'static str) -> OpError {
    OpError::from_kind(OpErrorKind::CoercionFailed { from, into })
}

/// Ordering comparison between incomparable values.
#[cold]
pub fn comparison_failed(left: &'static str, right: &'static str) -> OpError {
    OpError::from_kind(OpErrorKind::ComparisonFailed { left, right })
}

// Method Selector Errors

/// Selector does not name an operator method.
#[cold]
pub fn undefined_method(selector: &str, type_name: &'static str) -> OpError {
    OpError::from_kind(OpErrorKind::UndefinedMethod {
        selector: selector.to_string(),
        type_name,
    })
}

/// Operator method called with the wrong number of arguments.
#[cold]
pub fn arity_mismatch(selector: &str, expected: usize, got: usize) -> OpError {
    OpError::from_kind(OpErrorKind::ArityMismatch {
        selector: selector.to_string(),
        expected,
        got,
    })
}
