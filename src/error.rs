use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExprError>;

/// Errors raised while building or differentiating expressions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// `Number` built from a value that is not numeric
    #[error("Number expects a numeric value, got {found}")]
    InvalidLiteral { found: &'static str },

    /// `Symbol` built from a value that is not a string
    #[error("Symbol expects a string name, got {found}")]
    InvalidSymbolName { found: &'static str },

    /// Arithmetic on an operand that is neither an expression nor a number
    #[error("unsupported operand types for {op}: {lhs} and {rhs}")]
    UnsupportedOperandType {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    // Safety limits
    #[error("expression size exceeds maximum node count limit of {limit}")]
    MaxNodesExceeded { limit: usize },

    #[error("expression nesting depth exceeds maximum limit of {limit}")]
    MaxDepthExceeded { limit: usize },
}
