//! Operator overloading for ergonomic expression building
//!
//! Any combination of expressions and native numbers builds the matching
//! operator node; numbers are wrapped in `Number` and operand order is kept
//! as written, so `2 - x` is `Sub(2, x)`.
//!
//! # Example
//! ```
//! use symexpr::Expr;
//!
//! let x = Expr::symbol("x");
//! let expr = 2i32 * &x + x.clone().pow(2);
//! assert_eq!(expr.to_string(), "2 * x + x ^ 2");
//! ```
//!
//! Rust's `^` is bitwise xor and binds looser than `+`, so powers are
//! built with [`Expr::pow`] or the free function [`pow`].

use crate::{BinaryOp, Expr, Literal};
use std::ops::{Add, Div, Mul, Sub};

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

// Convert f64 to Expr
impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::number(n)
    }
}

// Convert i32 to Expr
impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::number(n)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::number(n)
    }
}

impl From<Literal> for Expr {
    fn from(n: Literal) -> Self {
        Expr::number(n)
    }
}

// ===== Macro for generating operator implementations =====
// Every pair converts both sides with `Expr::from`, left stays left

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::add_expr(Expr::from(self), Expr::from(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sub_expr(Expr::from(self), Expr::from(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::mul_expr(Expr::from(self), Expr::from(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::div_expr(Expr::from(self), Expr::from(rhs))
            }
        }
    };
}

// Expr operations
impl_binary_ops!(Expr, Expr);
impl_binary_ops!(Expr, &Expr);
impl_binary_ops!(Expr, f64);
impl_binary_ops!(Expr, i32);
impl_binary_ops!(Expr, i64);

impl_binary_ops!(&Expr, Expr);
impl_binary_ops!(&Expr, &Expr);
impl_binary_ops!(&Expr, f64);
impl_binary_ops!(&Expr, i32);
impl_binary_ops!(&Expr, i64);

// Numbers on the left side
impl_binary_ops!(f64, Expr);
impl_binary_ops!(f64, &Expr);
impl_binary_ops!(i32, Expr);
impl_binary_ops!(i32, &Expr);
impl_binary_ops!(i64, Expr);
impl_binary_ops!(i64, &Expr);

impl Expr {
    /// Raise to a power: `x.pow(2)` builds `Pow(x, 2)`
    #[inline]
    pub fn pow(self, exp: impl Into<Expr>) -> Expr {
        Expr::pow_expr(self, exp.into())
    }
}

/// Build `lhs + rhs`
pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    BinaryOp::Add.build(lhs.into(), rhs.into())
}

/// Build `lhs - rhs`
pub fn sub(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    BinaryOp::Sub.build(lhs.into(), rhs.into())
}

/// Build `lhs * rhs`
pub fn mul(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    BinaryOp::Mul.build(lhs.into(), rhs.into())
}

/// Build `lhs / rhs`
pub fn div(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    BinaryOp::Div.build(lhs.into(), rhs.into())
}

/// Build `base ^ exp`; also covers the reflected form `pow(2, x)`
pub fn pow(base: impl Into<Expr>, exp: impl Into<Expr>) -> Expr {
    BinaryOp::Pow.build(base.into(), exp.into())
}

/// Convenience function to create a symbol
pub fn sym(name: &str) -> Expr {
    Expr::symbol(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExprKind;

    fn operand_pair(e: &Expr) -> (Expr, Expr) {
        let (l, r) = e.binary_operands().expect("operator node");
        ((**l).clone(), (**r).clone())
    }

    #[test]
    fn test_expr_op_expr() {
        let x = sym("x");
        let y = sym("y");
        let e = &x - &y;
        assert!(matches!(e.kind(), ExprKind::Sub(_, _)));
        let (l, r) = operand_pair(&e);
        assert_eq!(l.id(), x.id());
        assert_eq!(r.id(), y.id());
    }

    #[test]
    fn test_expr_op_number_wraps_literal() {
        let x = sym("x");
        let e = &x * 2.5;
        let (l, r) = operand_pair(&e);
        assert_eq!(l.as_symbol(), Some("x"));
        assert_eq!(r.as_number(), Some(Literal::Float(2.5)));
    }

    #[test]
    fn test_reflected_preserves_order() {
        let x = sym("x");
        for e in [3 - &x, 3 / &x, pow(3, &x)] {
            let (l, r) = operand_pair(&e);
            assert_eq!(l.as_number(), Some(Literal::Int(3)));
            assert_eq!(r.as_symbol(), Some("x"));
        }
        assert_eq!((3i32 - &x).to_string(), "3 - x");
        assert_eq!((1.5 / &x).to_string(), "1.5 / x");
    }

    #[test]
    fn test_i64_operands() {
        let x = sym("x");
        let n: i64 = 5;

        let e = n - &x;
        assert!(matches!(e.kind(), ExprKind::Sub(_, _)));
        let (l, r) = operand_pair(&e);
        assert_eq!(l.as_number(), Some(Literal::Int(5)));
        assert_eq!(r.id(), x.id());
        assert_eq!(e.to_string(), "5 - x");

        assert_eq!((&x + n).to_string(), "x + 5");
        assert_eq!((x.clone() * n).debug_string(), "Mul(\"x\", 5)");
        assert_eq!((n / x.clone()).to_string(), "5 / x");
    }

    #[test]
    fn test_named_and_operator_forms_agree() {
        let x = sym("x");
        assert_eq!(add(&x, 1), &x + 1);
        assert_eq!(sub(&x, 1), &x - 1);
        assert_eq!(mul(&x, 1), &x * 1);
        assert_eq!(div(&x, 1), &x / 1);
        assert_eq!(pow(&x, 1), x.clone().pow(1));
    }

    #[test]
    fn test_symbol_arithmetic() {
        let x = sym("x");
        let y = sym("y");

        let sum = x.clone() + y.clone();
        assert_eq!(format!("{}", sum), "x + y");

        let scaled = 2.0 * x.clone();
        assert_eq!(format!("{}", scaled), "2.0 * x");

        let squared = x.pow(2);
        assert_eq!(format!("{}", squared), "x ^ 2");
    }
}
