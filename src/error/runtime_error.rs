#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// A binary node reached the evaluator without both children.
    /// Unreachable through the parser; kept as an internal consistency
    /// check on hand-built trees.
    InvalidOperation,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),

            Self::InvalidOperation => write!(f, "Invalid AST operation"),
        }
    }
}

impl std::error::Error for RuntimeError {}
