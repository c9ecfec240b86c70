//! Parallel batch differentiation using Rayon
//!
//! Expressions are immutable and their operands are held in `Arc`, so
//! independent traversals over overlapping graphs can run on separate
//! threads without locking.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! symexpr = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{Diff, Expr, Result, differentiate};
use rayon::prelude::*;

/// Differentiate every expression in `exprs` with respect to `var`, in parallel
pub fn differentiate_all(exprs: &[Expr], var: &str) -> Vec<Expr> {
    exprs.par_iter().map(|e| differentiate(e, var)).collect()
}

/// Run a configured [`Diff`] over every expression, in parallel
///
/// The first error encountered is returned.
pub fn try_differentiate_all(diff: &Diff, exprs: &[Expr], var: &str) -> Result<Vec<Expr>> {
    exprs
        .par_iter()
        .map(|e| diff.differentiate(e, var))
        .collect()
}

/// Gradient with one task per variable
pub fn gradient_parallel(expr: &Expr, vars: &[&str]) -> Vec<Expr> {
    vars.par_iter().map(|var| differentiate(expr, var)).collect()
}
