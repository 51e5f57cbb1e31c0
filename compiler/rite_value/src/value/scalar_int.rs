//! 32-bit integer newtype that fixes the overflow policy.
//!
//! `ScalarInt` wraps `i32` and intentionally does NOT implement `Add`, `Sub`,
//! `Mul`, `Div`, `Rem`, `Neg`, `Shl` or `Shr`. Every arithmetic operation goes
//! through a named method so the bit-width policy is visible at the call site:
//!
//! - `+`, `-`, `*`, `**` and negation wrap in two's complement.
//! - `/` and `%` floor toward negative infinity and return `None` only for a
//!   zero divisor (`MIN / -1` wraps to `MIN`).
//! - Shifts discard bits that leave the 32-bit word. A count of 32 or more
//!   yields zero in either direction, and a negative count shifts the other
//!   way.
//!
//! Bitwise traits (`BitAnd`, `BitOr`, `BitXor`, `Not`) are implemented because
//! they cannot overflow.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A 32-bit signed integer with wraparound arithmetic.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ScalarInt(i32);

impl ScalarInt {
    /// Width of the representation in bits.
    pub const BITS: u32 = i32::BITS;

    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// The one value.
    pub const ONE: Self = Self(1);

    /// The minimum value (`i32::MIN`).
    pub const MIN: Self = Self(i32::MIN);

    /// The maximum value (`i32::MAX`).
    pub const MAX: Self = Self(i32::MAX);

    /// Create a new `ScalarInt` from a raw `i32`.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Extract the raw `i32` value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Two's-complement negation: `MIN.wrapping_neg() == MIN`.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    #[inline]
    pub const fn wrapping_pow(self, exp: u32) -> Self {
        Self(self.0.wrapping_pow(exp))
    }

    /// Floor division. Returns `None` only when `rhs` is zero.
    ///
    /// Rounds toward negative infinity, unlike truncating division:
    /// - `7.floor_div(2)` = `Some(3)`
    /// - `(-7).floor_div(2)` = `Some(-4)` (not -3)
    pub const fn floor_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let div = self.0.wrapping_div(rhs.0);
        let rem = self.0.wrapping_rem(rhs.0);
        if rem != 0 && (rem < 0) != (rhs.0 < 0) {
            Some(Self(div.wrapping_sub(1)))
        } else {
            Some(Self(div))
        }
    }

    /// Floor modulo. Returns `None` only when `rhs` is zero.
    ///
    /// The result takes the sign of the divisor:
    /// - `(-7).floor_mod(3)` = `Some(2)`
    /// - `7.floor_mod(-3)` = `Some(-2)`
    pub const fn floor_mod(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let rem = self.0.wrapping_rem(rhs.0);
        if rem != 0 && (rem < 0) != (rhs.0 < 0) {
            // Opposite signs, so the sum stays in range.
            Some(Self(rem.wrapping_add(rhs.0)))
        } else {
            Some(Self(rem))
        }
    }

    /// Left shift by a signed count.
    ///
    /// Bits shifted past bit 31 are discarded, so `1 << 31` is `MIN`.
    /// Negative counts shift right.
    pub fn shift_left(self, count: Self) -> Self {
        let count = i64::from(count.0);
        if count < 0 {
            self.shr_magnitude(count.unsigned_abs())
        } else {
            self.shl_magnitude(count.unsigned_abs())
        }
    }

    /// Arithmetic right shift by a signed count.
    ///
    /// Counts of 32 or more give zero for every operand. Negative counts
    /// shift left.
    pub fn shift_right(self, count: Self) -> Self {
        let count = i64::from(count.0);
        if count < 0 {
            self.shl_magnitude(count.unsigned_abs())
        } else {
            self.shr_magnitude(count.unsigned_abs())
        }
    }

    fn shl_magnitude(self, count: u64) -> Self {
        match u32::try_from(count) {
            Ok(n) if n < Self::BITS => Self(self.0.wrapping_shl(n)),
            _ => Self::ZERO,
        }
    }

    fn shr_magnitude(self, count: u64) -> Self {
        match u32::try_from(count) {
            Ok(n) if n < Self::BITS => Self(self.0.wrapping_shr(n)),
            _ => Self::ZERO,
        }
    }
}

// Bitwise Traits (cannot overflow)

impl BitAnd for ScalarInt {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for ScalarInt {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for ScalarInt {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for ScalarInt {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// Conversions

impl From<i32> for ScalarInt {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ScalarInt> for i32 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        value.0
    }
}

/// Exact: every 32-bit integer is representable as an `f64`.
impl From<ScalarInt> for f64 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        f64::from(value.0)
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
