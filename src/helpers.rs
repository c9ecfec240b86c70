//! Multi-variable differentiation helpers
//!
//! Gradient, hessian and jacobian built from repeated single-variable
//! differentiation. Results are unsimplified expression trees.

use crate::{Expr, differentiate};

/// Compute the gradient of an expression with respect to multiple variables
/// Returns a vector of partial derivatives [∂f/∂x₁, ∂f/∂x₂, ...]
///
/// # Example
/// ```
/// use symexpr::{Expr, gradient};
///
/// let (x, y) = (Expr::symbol("x"), Expr::symbol("y"));
/// let grad = gradient(&(&x * &y), &["x", "y"]);
/// assert_eq!(grad[0].to_string(), "1.0 * y + 0.0 * x");
/// assert_eq!(grad[1].to_string(), "0.0 * y + 1.0 * x");
/// ```
pub fn gradient(expr: &Expr, vars: &[&str]) -> Vec<Expr> {
    vars.iter().map(|var| differentiate(expr, var)).collect()
}

/// Compute the hessian matrix of an expression
/// Returns `h[i][j] = ∂²f/∂xᵢ∂xⱼ`
pub fn hessian(expr: &Expr, vars: &[&str]) -> Vec<Vec<Expr>> {
    gradient(expr, vars)
        .iter()
        .map(|partial| gradient(partial, vars))
        .collect()
}

/// Compute the jacobian matrix of a vector function
/// Returns `j[i][j] = ∂fᵢ/∂xⱼ`
pub fn jacobian(exprs: &[Expr], vars: &[&str]) -> Vec<Vec<Expr>> {
    exprs.iter().map(|expr| gradient(expr, vars)).collect()
}
