//! Runtime values for the Rite operator core.
//!
//! Values are immutable scalars and are passed by value. There is no heap
//! variant: strings, arrays and objects live in the surrounding runtime and
//! never reach operator dispatch.
//!
//! # Truthiness
//!
//! Only `nil` and `false` are falsy. `0` and `0.0` are truthy.
//!
//! # Equality
//!
//! `PartialEq` follows the language's `==`: Integer and Float compare by
//! numeric value (`1 == 1.0`), NaN never equals anything, and values of
//! unrelated kinds are simply unequal.

mod scalar_int;

use std::cmp::Ordering;
use std::fmt;

pub use scalar_int::ScalarInt;

/// Runtime value in the Rite interpreter.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// `nil`.
    Nil,
    /// `true` / `false`.
    Bool(bool),
    /// 32-bit integer (uses `ScalarInt` to pin the wraparound policy).
    Int(ScalarInt),
    /// Double-precision float.
    Float(f64),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub const fn int(n: i32) -> Self {
        Value::Int(ScalarInt::new(n))
    }

    /// Ruby-style truthiness: everything except `nil` and `false`.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Integer or Float.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(n.raw()),
            _ => None,
        }
    }

    /// Try to read a numeric value as a float. Integers convert exactly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(f64::from(*n)),
            _ => None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Class name of this value, as it appears in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "NilClass",
            Value::Bool(true) => "TrueClass",
            Value::Bool(false) => "FalseClass",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
        }
    }

    /// Language-level `==`.
    ///
    /// Mixed Integer/Float pairs compare numerically; the integer side
    /// converts to `f64` exactly.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                float_eq(f64::from(*a), *b)
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

// IEEE 754 equality: NaN != NaN, -0.0 == 0.0
#[inline]
fn float_eq(a: f64, b: f64) -> bool {
    a.partial_cmp(&b) == Some(Ordering::Equal)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(n)
    }
}

impl From<ScalarInt> for Value {
    fn from(n: ScalarInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    /// Formats the value the way `inspect` prints it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
        }
    }
}

/// Fixed notation for decimal exponents in `-4..16`, exponent form outside.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return write!(f, "NaN");
    }
    if x.is_infinite() {
        return write!(f, "{}Infinity", if x < 0.0 { "-" } else { "" });
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{x}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        if x.fract() == 0.0 {
            // Integral floats keep a trailing `.0` so they read back as Float.
            write!(f, "{x:.1}")
        } else {
            write!(f, "{x}")
        }
    } else {
        let point = if mantissa.contains('.') { "" } else { ".0" };
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}{point}e{sign}{:02}", exp.unsigned_abs())
    }
}
