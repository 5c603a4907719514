#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character the scanner does not recognize.
    InvalidCharacter {
        /// The offending input slice.
        token: String,
    },
    /// The token sequence does not match the grammar: a token (or the end
    /// of the input) appeared where an integer literal or `(` was required.
    SyntaxError,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// The AST node arena is at capacity.
    OutOfNodes,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { token } => write!(f, "Invalid character '{token}'"),

            Self::SyntaxError => write!(f, "Syntax error"),

            Self::ExpectedClosingParen => write!(f, "')' expected"),

            Self::OutOfNodes => write!(f, "Out of AST nodes"),
        }
    }
}

impl std::error::Error for ParseError {}
