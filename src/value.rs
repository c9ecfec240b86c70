//! Run-time typed operands for fallible construction
//!
//! The operator overloads and [`crate::add`]-style builders are checked by the
//! compiler. When the kind of a value is only known at run time (a binding
//! layer, a config file, user input), wrap it in an [`Operand`] and use the
//! `try_*` constructors, which reject non-numeric literals, non-string
//! symbol names and operands that cannot take part in arithmetic.
//!
//! # Example
//! ```
//! use symexpr::{BinaryOp, Expr, ExprError, try_binary};
//!
//! let x = Expr::try_symbol("x").unwrap();
//! let e = try_binary(BinaryOp::Sub, 1, &x).unwrap();
//! assert_eq!(e.to_string(), "1 - x");
//!
//! assert!(matches!(Expr::try_number("two"), Err(ExprError::InvalidLiteral { .. })));
//! ```

use crate::{BinaryOp, Expr, ExprError, Literal, Result};

/// A value of run-time determined kind
#[derive(Debug, Clone)]
pub enum Operand {
    /// Native number
    Num(Literal),
    /// Text, valid only as a symbol name
    Text(String),
    /// Boolean, never valid in an expression
    Bool(bool),
    /// An already built expression
    Expr(Expr),
    /// Absent value
    Nil,
}

impl Operand {
    /// Short name of the operand's kind, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Num(_) => "number",
            Operand::Text(_) => "string",
            Operand::Bool(_) => "bool",
            Operand::Expr(_) => "expression",
            Operand::Nil => "nil",
        }
    }

    /// Lift into an expression if this is an expression or a number
    fn into_expr(self) -> Option<Expr> {
        match self {
            Operand::Expr(e) => Some(e),
            Operand::Num(n) => Some(Expr::number(n)),
            _ => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Num(Literal::Float(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Num(Literal::from(n))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Num(Literal::Int(n))
    }
}

impl From<Literal> for Operand {
    fn from(n: Literal) -> Self {
        Operand::Num(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<Expr> for Operand {
    fn from(e: Expr) -> Self {
        Operand::Expr(e)
    }
}

impl From<&Expr> for Operand {
    fn from(e: &Expr) -> Self {
        Operand::Expr(e.clone())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Operand::Nil,
        }
    }
}

impl Expr {
    /// Build a `Number`, failing with `InvalidLiteral` unless `value` is numeric
    pub fn try_number(value: impl Into<Operand>) -> Result<Expr> {
        match value.into() {
            Operand::Num(n) => Ok(Expr::number(n)),
            other => Err(ExprError::InvalidLiteral {
                found: other.type_name(),
            }),
        }
    }

    /// Build a `Symbol`, failing with `InvalidSymbolName` unless `value` is text
    pub fn try_symbol(value: impl Into<Operand>) -> Result<Expr> {
        match value.into() {
            Operand::Text(name) => Ok(Expr::symbol(name)),
            other => Err(ExprError::InvalidSymbolName {
                found: other.type_name(),
            }),
        }
    }

    /// `self + rhs` for a run-time typed right operand
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Expr> {
        try_binary(BinaryOp::Add, self, rhs)
    }

    /// `self - rhs` for a run-time typed right operand
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Expr> {
        try_binary(BinaryOp::Sub, self, rhs)
    }

    /// `self * rhs` for a run-time typed right operand
    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Expr> {
        try_binary(BinaryOp::Mul, self, rhs)
    }

    /// `self / rhs` for a run-time typed right operand
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Expr> {
        try_binary(BinaryOp::Div, self, rhs)
    }

    /// `self ^ rhs` for a run-time typed right operand
    pub fn try_pow(&self, rhs: impl Into<Operand>) -> Result<Expr> {
        try_binary(BinaryOp::Pow, self, rhs)
    }
}

/// Build `lhs op rhs` from run-time typed operands.
///
/// At least one side must be an expression and the other an expression or a
/// number; numbers are wrapped in `Number` and operand order is preserved.
/// Anything else fails with `UnsupportedOperandType`.
pub fn try_binary(op: BinaryOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Expr> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let unsupported = ExprError::UnsupportedOperandType {
        op: op.glyph(),
        lhs: lhs.type_name(),
        rhs: rhs.type_name(),
    };

    if !matches!(lhs, Operand::Expr(_)) && !matches!(rhs, Operand::Expr(_)) {
        return Err(unsupported);
    }
    match (lhs.into_expr(), rhs.into_expr()) {
        (Some(l), Some(r)) => Ok(op.build(l, r)),
        _ => Err(unsupported),
    }
}
