//! Builder pattern API for differentiation
//!
//! Provides a fluent interface for configuring and executing differentiation.
//!
//! # Example
//! ```
//! use symexpr::{Diff, Expr};
//!
//! let x = Expr::symbol("x");
//! let expr = x.clone().pow(3);
//!
//! let second = Diff::new()
//!     .order(2)
//!     .max_nodes(1_000)
//!     .differentiate(&expr, "x")
//!     .unwrap();
//! assert_eq!(second.kind_name(), "Add");
//! ```

use crate::visitor::try_postorder_visit;
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, Expr, ExprError, Result, differentiate};
use tracing::debug;

/// Builder for differentiation operations
#[derive(Debug, Clone)]
pub struct Diff {
    order: u32,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Default for Diff {
    fn default() -> Self {
        Diff {
            order: 1,
            max_depth: None,
            max_nodes: None,
        }
    }
}

impl Diff {
    /// Create a new differentiation builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with the default depth and node limits
    pub fn bounded() -> Self {
        Self::new()
            .max_depth(DEFAULT_MAX_DEPTH)
            .max_nodes(DEFAULT_MAX_NODES)
    }

    /// Number of times to differentiate (0 returns the input unchanged)
    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set maximum AST depth accepted as input to each pass
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum number of distinct nodes accepted as input to each pass
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Differentiate `expr` with respect to `var`, `order` times
    pub fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr> {
        debug!(var, order = self.order, "differentiate with builder");
        let mut current = expr.clone();
        for _ in 0..self.order {
            self.check_limits(&current)?;
            current = differentiate(&current, var);
        }
        Ok(current)
    }

    /// Fail fast when `expr` exceeds the configured size or depth
    fn check_limits(&self, expr: &Expr) -> Result<()> {
        if self.max_nodes.is_none() && self.max_depth.is_none() {
            return Ok(());
        }
        let mut nodes = 0usize;
        try_postorder_visit(expr, |_, depths: &[&usize]| {
            nodes += 1;
            if let Some(limit) = self.max_nodes
                && nodes > limit
            {
                return Err(ExprError::MaxNodesExceeded { limit });
            }
            let depth = 1 + depths.iter().map(|d| **d).max().unwrap_or(0);
            if let Some(limit) = self.max_depth
                && depth > limit
            {
                return Err(ExprError::MaxDepthExceeded { limit });
            }
            Ok(depth)
        })
        .map(|_| ())
    }
}
