/// Parsing errors.
///
/// Defines all error types that can occur before evaluation: lexical
/// mistakes, token sequences that do not match the grammar, and exhaustion
/// of the AST node arena while building the tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an AST,
/// such as division by zero or a structurally malformed node.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
