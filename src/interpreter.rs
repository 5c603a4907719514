/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST bottom-up, performing the arithmetic each
/// node describes and producing a single integer result. It is the final
/// stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (scanner) reads the raw input line and produces a stream of
/// tokens: integer literals, operators, and parentheses. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer via recursive
/// descent with one token of lookahead, constructing an AST that encodes
/// operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into arena-allocated AST nodes.
/// - Validates the grammar, reporting syntax errors.
pub mod parser;
