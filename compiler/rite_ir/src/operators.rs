//! Binary and Unary Operators
//!
//! All operator types the runtime core evaluates.
//!
//! # Method Selectors
//!
//! The scripting language treats operators as methods: `a + b` is `a.+(b)`
//! and `-a` is `a.-@()`. `method_name` and `Operator::from_method_name`
//! translate between the token and that selector. `&&` and `||` are control
//! flow, not methods, and have no selector.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Cmp,

    // Logical
    And,
    Or,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Pow,
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::Cmp,
        Self::And,
        Self::Or,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
        Self::Shl,
        Self::Shr,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            // Comparison
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Cmp => "<=>",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
            // Bitwise
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    /// Returns the method selector this operator dispatches to.
    ///
    /// `None` for `&&` and `||`, which short-circuit and are never sent
    /// to the receiver.
    pub const fn method_name(self) -> Option<&'static str> {
        if self.is_short_circuit() {
            None
        } else {
            Some(self.as_symbol())
        }
    }

    /// `&&` and `||`: the right operand is evaluated only when needed.
    #[inline]
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Operators that are defined on Integer only and never coerce.
    #[inline]
    pub const fn is_bitwise(self) -> bool {
        matches!(
            self,
            Self::BitAnd | Self::BitOr | Self::BitXor | Self::Shl | Self::Shr
        )
    }

    /// Ordering operators that yield a boolean (`<`, `<=`, `>`, `>=`).
    #[inline]
    pub const fn is_relational(self) -> bool {
        matches!(self, Self::Lt | Self::LtEq | Self::Gt | Self::GtEq)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Plus,
    Neg,
    BitNot,
    Not,
}

impl UnaryOp {
    /// Every unary operator, in declaration order.
    pub const ALL: [Self; 4] = [Self::Plus, Self::Neg, Self::BitNot, Self::Not];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::Not => "!",
        }
    }

    /// Returns the method selector (`+@` and `-@` disambiguate from the
    /// binary forms).
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Plus => "+@",
            Self::Neg => "-@",
            Self::BitNot => "~",
            Self::Not => "!",
        }
    }
}

/// An operator of either arity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operator {
    /// Resolve a method selector to the operator it names.
    ///
    /// Returns `None` for selectors that are not operators. `&&` and `||`
    /// are not selectors and also resolve to `None`.
    pub fn from_method_name(selector: &str) -> Option<Self> {
        if let Some(op) = UnaryOp::ALL
            .into_iter()
            .find(|op| op.method_name() == selector)
        {
            return Some(Self::Unary(op));
        }
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.method_name() == Some(selector))
            .map(Self::Binary)
    }

    /// Number of arguments the method form takes (the receiver excluded).
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 0,
            Self::Binary(_) => 1,
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Unary(op) => op.as_symbol(),
            Self::Binary(op) => op.as_symbol(),
        }
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}
