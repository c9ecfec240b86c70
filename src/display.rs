// Display formatting for AST
use crate::{Expr, ExprKind, Literal};
use std::fmt;

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on integral floats
            Literal::Float(n) => write!(f, "{:?}", n),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n),
            ExprKind::Symbol(s) => write!(f, "{}", s),
            _ => {
                let (Some(op), Some((u, v))) = (self.op(), self.binary_operands()) else {
                    unreachable!("operator kinds always carry two operands")
                };
                let p = op.precedence();
                write_operand(f, u, p)?;
                write!(f, " {} ", op.glyph())?;
                write_operand(f, v, p)
            }
        }
    }
}

/// Parenthesize an operand only when it binds strictly looser than its parent.
///
/// An equal-precedence right operand is left bare, so `a - (b - c)` renders
/// as `a - b - c`.
fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parent_precedence: u8) -> fmt::Result {
    if operand.precedence() < parent_precedence {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

// Debug form: kind name followed by the operand sequence, terminals show
// only their wrapped value, e.g. `Add("x", 2)`
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n),
            ExprKind::Symbol(s) => write!(f, "{:?}", s),
            _ => match self.binary_operands() {
                Some((u, v)) => write!(f, "{}({:?}, {:?})", self.kind_name(), u, v),
                None => unreachable!("operator kinds always carry two operands"),
            },
        }
    }
}

impl Expr {
    /// Debug representation, identical to `format!("{:?}", self)`
    pub fn debug_string(&self) -> String {
        format!("{:?}", self)
    }
}
