//! Abstract Syntax Tree for algebraic expressions
//!
//! An expression is a graph of immutable nodes. Operands are held behind
//! `Arc`, so one node can be an operand of several parents at once. Every
//! constructed node receives a unique `id`, which is what the postorder
//! visitor uses as node identity.

use std::ops::Deref;
use std::sync::{Arc, LazyLock};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for expression IDs
static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Precedence reported by terminal nodes (never parenthesized)
pub const TERMINAL_PRECEDENCE: u8 = 3;

/// Native numeric value wrapped by a `Number` node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
}

impl Literal {
    /// Value as a float (integers are widened)
    pub fn to_f64(self) -> f64 {
        match self {
            Literal::Int(n) => n as f64,
            Literal::Float(n) => n,
        }
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Int(n as i64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

/// The five binary operators, with their glyph and precedence class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// Glyph used by the readable rendering
    pub fn glyph(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 0,
            BinaryOp::Mul | BinaryOp::Div => 1,
            BinaryOp::Pow => 2,
        }
    }

    /// Kind name, as shown by the debug rendering
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
            BinaryOp::Pow => "Pow",
        }
    }

    /// Build the operator node `lhs op rhs`
    pub fn build(self, lhs: Expr, rhs: Expr) -> Expr {
        let (l, r) = (Arc::new(lhs), Arc::new(rhs));
        Expr::new(match self {
            BinaryOp::Add => ExprKind::Add(l, r),
            BinaryOp::Sub => ExprKind::Sub(l, r),
            BinaryOp::Mul => ExprKind::Mul(l, r),
            BinaryOp::Div => ExprKind::Div(l, r),
            BinaryOp::Pow => ExprKind::Pow(l, r),
        })
    }
}

#[derive(Clone)]
pub struct Expr {
    /// Node identity. Clones share it, new constructions never do.
    pub(crate) id: u64,
    pub(crate) kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

// Structural equality based on KIND only, ids are ignored
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

// Deep chains are released iteratively; children are swapped for a shared
// placeholder so no recursive drop runs past one level.
static DUMMY_ARC: LazyLock<Arc<Expr>> =
    LazyLock::new(|| Arc::new(Expr::new(ExprKind::Number(Literal::Int(0)))));

impl Drop for Expr {
    fn drop(&mut self) {
        fn drain_children(kind: &mut ExprKind, queue: &mut Vec<Arc<Expr>>) {
            match kind {
                ExprKind::Add(left, right)
                | ExprKind::Sub(left, right)
                | ExprKind::Mul(left, right)
                | ExprKind::Div(left, right)
                | ExprKind::Pow(left, right) => {
                    queue.push(std::mem::replace(left, Arc::clone(&DUMMY_ARC)));
                    queue.push(std::mem::replace(right, Arc::clone(&DUMMY_ARC)));
                }
                ExprKind::Number(_) | ExprKind::Symbol(_) => {}
            }
        }

        if self.is_terminal() {
            return;
        }
        let mut work_queue = Vec::new();
        drain_children(&mut self.kind, &mut work_queue);

        while let Some(child_arc) = work_queue.pop() {
            if let Ok(mut child_expr) = Arc::try_unwrap(child_arc) {
                drain_children(&mut child_expr.kind, &mut work_queue);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal (e.g., 2, 0.5)
    Number(Literal),

    /// Named variable (e.g., "x")
    Symbol(String),

    // Binary operations
    /// Addition
    Add(Arc<Expr>, Arc<Expr>),

    /// Subtraction
    Sub(Arc<Expr>, Arc<Expr>),

    /// Multiplication
    Mul(Arc<Expr>, Arc<Expr>),

    /// Division
    Div(Arc<Expr>, Arc<Expr>),

    /// Exponentiation
    Pow(Arc<Expr>, Arc<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr {
            id: next_id(),
            kind,
        }
    }

    // Accessor methods

    /// Identity of this node
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Check if expression is a numeric literal and return its value
    pub fn as_number(&self) -> Option<Literal> {
        match &self.kind {
            ExprKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if expression is a symbol and return its name
    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Operator of this node, `None` for terminals
    pub fn op(&self) -> Option<BinaryOp> {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Symbol(_) => None,
            ExprKind::Add(..) => Some(BinaryOp::Add),
            ExprKind::Sub(..) => Some(BinaryOp::Sub),
            ExprKind::Mul(..) => Some(BinaryOp::Mul),
            ExprKind::Div(..) => Some(BinaryOp::Div),
            ExprKind::Pow(..) => Some(BinaryOp::Pow),
        }
    }

    /// Both operands of an operator node
    pub fn binary_operands(&self) -> Option<(&Arc<Expr>, &Arc<Expr>)> {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Symbol(_) => None,
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => Some((l, r)),
        }
    }

    /// Ordered operand sequence: empty for terminals, length 2 for operators
    pub fn operands(&self) -> Vec<&Expr> {
        match self.binary_operands() {
            Some((l, r)) => vec![&**l, &**r],
            None => Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.op().is_none()
    }

    /// Precedence class: 0 for `+ -`, 1 for `* /`, 2 for `^`, 3 for terminals
    pub fn precedence(&self) -> u8 {
        self.op().map_or(TERMINAL_PRECEDENCE, BinaryOp::precedence)
    }

    /// Name of the node kind (`"Number"`, `"Symbol"`, `"Add"`, ...)
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::Number(_) => "Number",
            ExprKind::Symbol(_) => "Symbol",
            _ => self.op().map_or("", BinaryOp::name),
        }
    }

    // Convenience constructors

    /// Create a number expression
    pub fn number(n: impl Into<Literal>) -> Self {
        Expr::new(ExprKind::Number(n.into()))
    }

    /// Create a symbol expression
    pub fn symbol(s: impl Into<String>) -> Self {
        Expr::new(ExprKind::Symbol(s.into()))
    }

    /// Create an addition expression
    pub fn add_expr(left: Expr, right: Expr) -> Self {
        BinaryOp::Add.build(left, right)
    }

    /// Create a subtraction expression
    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        BinaryOp::Sub.build(left, right)
    }

    /// Create a multiplication expression
    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        BinaryOp::Mul.build(left, right)
    }

    /// Create a division expression
    pub fn div_expr(left: Expr, right: Expr) -> Self {
        BinaryOp::Div.build(left, right)
    }

    /// Create a power expression
    pub fn pow_expr(base: Expr, exponent: Expr) -> Self {
        BinaryOp::Pow.build(base, exponent)
    }

    /// Count distinct nodes (a shared subexpression counts once)
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        crate::visitor::postorder_visit(self, |_, _: &[&()]| count += 1);
        count
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn max_depth(&self) -> usize {
        crate::visitor::postorder_visit(self, |_, depths: &[&usize]| {
            1 + depths.iter().map(|d| **d).max().unwrap_or(0)
        })
    }

    /// Check whether the symbol `var` occurs anywhere in the expression
    pub fn contains_var(&self, var: &str) -> bool {
        crate::visitor::postorder_visit_with(self, var, |e, found: &[&bool], var| {
            e.as_symbol() == Some(var) || found.iter().any(|f| **f)
        })
    }

    /// Collect all symbol names, sorted
    pub fn variables(&self) -> Vec<String> {
        let mut names = std::collections::BTreeSet::new();
        crate::visitor::postorder_visit(self, |e, _: &[&()]| {
            if let Some(name) = e.as_symbol() {
                names.insert(name.to_string());
            }
        });
        names.into_iter().collect()
    }

    /// Differentiate this expression with respect to `var`
    ///
    /// Shorthand for [`crate::differentiate`].
    pub fn diff(&self, var: &str) -> Expr {
        crate::differentiate(self, var)
    }
}
