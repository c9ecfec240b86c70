// Differentiation engine - one rule per node kind, applied bottom-up
//
// Each rule receives the node, the derivatives already computed for its
// operands and the differentiation variable. Rules only build new nodes;
// the original operands are shared into the result, never copied or mutated.
// No simplification happens here: d/dx(x * x) stays `1.0 * x + 1.0 * x`.

use crate::visitor::postorder_visit_with;
use crate::{Expr, ExprKind};
use tracing::{debug, trace};

/// Differentiate `expr` with respect to the symbol named `var`
///
/// # Example
/// ```
/// use symexpr::{Expr, differentiate};
///
/// let x = Expr::symbol("x");
/// let d = differentiate(&(&x * &x), "x");
/// assert_eq!(d.to_string(), "1.0 * x + 1.0 * x");
/// ```
pub fn differentiate(expr: &Expr, var: &str) -> Expr {
    debug!(var, root = expr.id(), "differentiating expression");
    postorder_visit_with(expr, var, derivative_rule)
}

/// Derivative of a single node given its operands' derivatives `d`
///
/// The power rule assumes a constant exponent.
pub(crate) fn derivative_rule(node: &Expr, d: &[&Expr], var: &str) -> Expr {
    trace!(kind = node.kind_name(), id = node.id(), "applying derivative rule");
    match node.kind() {
        ExprKind::Number(_) => Expr::number(0.0),

        ExprKind::Symbol(name) => {
            if name == var {
                Expr::number(1.0)
            } else {
                Expr::number(0.0)
            }
        }

        ExprKind::Add(_, _) => d[0] + d[1],

        ExprKind::Sub(_, _) => d[0] - d[1],

        // Product rule: u'v + v'u
        ExprKind::Mul(u, v) => d[0] * &**v + d[1] * &**u,

        // Quotient rule: (u'v - uv') / v^2
        ExprKind::Div(u, v) => (d[0] * &**v - &**u * d[1]) / Expr::from(&**v).pow(2),

        // Power rule: n * u^(n - 1) * u'
        ExprKind::Pow(u, n) => &**n * Expr::from(&**u).pow(&**n - 1) * d[0],
    }
}
