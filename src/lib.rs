//! Symbolic Expression Library
//!
//! Build algebraic expressions from numbers, symbols and the binary
//! operators `+ - * / ^`, render them with minimal parentheses, walk them
//! bottom-up with a memoizing postorder visitor, and differentiate them
//! symbolically.
//!
//! # Features
//! - Operator overloading for expressions and native numbers on either side
//! - Shared, immutable nodes: a subexpression can have many parents
//! - Generic postorder traversal, evaluating each distinct node once
//! - Differentiation by exhaustive per-kind rules
//! - **Builder pattern API** with order and size limits
//!
//! # Usage Examples
//!
//! ```
//! use symexpr::{Expr, differentiate};
//!
//! let x = Expr::symbol("x");
//! let y = Expr::symbol("y");
//!
//! let expr = (&x + &y) * &x;
//! assert_eq!(expr.to_string(), "(x + y) * x");
//!
//! let d = differentiate(&expr, "x");
//! assert_eq!(d.to_string(), "(1.0 + 0.0) * x + 1.0 * (x + y)");
//! ```

mod arithmetic;
mod ast;
mod builder;
mod differentiation;
mod display;
mod error;
mod helpers;
mod value;
pub mod visitor;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use arithmetic::{add, div, mul, pow, sub, sym};
pub use ast::{BinaryOp, Expr, ExprKind, Literal, TERMINAL_PRECEDENCE};
pub use builder::Diff;
pub use differentiation::differentiate;
pub use error::{ExprError, Result};
pub use helpers::{gradient, hessian, jacobian};
pub use value::{Operand, try_binary};
pub use visitor::{postorder_visit, postorder_visit_with, try_postorder_visit};

/// Suggested maximum AST depth for untrusted input
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// Suggested maximum AST node count for untrusted input
pub const DEFAULT_MAX_NODES: usize = 10_000;
