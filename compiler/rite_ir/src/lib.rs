//! Rite IR - operator tokens shared by the Rite runtime crates.
//!
//! The evaluator resolves an expression node to an operator token plus its
//! operand values. This crate owns the token types:
//!
//! - [`UnaryOp`]: `+@`, `-@`, `~`, `!`
//! - [`BinaryOp`]: arithmetic, bitwise, relational and logical operators
//! - [`Operator`]: either of the above, as resolved from a method selector
//!
//! Operators in the scripting language are methods on the receiver, so every
//! token also knows its method selector (`"+"`, `"-@"`, `"<=>"`, ...).

mod operators;

pub use operators::{BinaryOp, Operator, UnaryOp};
