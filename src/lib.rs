//! # intcalc
//!
//! intcalc is a small interactive calculator for integer arithmetic
//! expressions written in Rust.
//! It tokenizes, parses, and evaluates a single expression per input line,
//! with the usual precedence rules for `+`, `-`, `*`, `/`, `^` and
//! parenthesized grouping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::AstArena,
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::Token, parser::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` type and the bounded `AstArena` that owns
/// all nodes for the duration of a single expression. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node kinds for every operator and for integer literals.
/// - Allocates nodes by index from a fixed-capacity arena.
/// - Enforces the arena's capacity bound at allocation time.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. It standardizes error reporting so
/// the driver can print every failure as `Error: <description>`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   arena exhaustion).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from a line of text to an integer result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single arithmetic expression and returns its integer result.
///
/// This is the public entry point for the whole pipeline. The source line is
/// tokenized up front, parsed into an AST held in a fresh bounded arena, and
/// evaluated bottom-up. Each call is independent: the arena lives only for
/// this expression, so repeated evaluation of the same text always yields the
/// same result.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluating fails:
/// an unrecognized character, a malformed expression, an exhausted node
/// arena, or a division by zero.
///
/// # Examples
/// ```
/// use intcalc::eval_expression;
///
/// assert_eq!(eval_expression("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(eval_expression("(2 + 3) * 4").unwrap(), 20);
///
/// // Division by zero is reported as an error, not a panic.
/// assert!(eval_expression("5 / 0").is_err());
/// ```
pub fn eval_expression(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::InvalidCharacter { token: slice.to_string(), }));
        }
    }

    let mut arena = AstArena::new();
    let mut iter = tokens.iter().peekable();

    let root = parse_expression(&mut iter, &mut arena)?;
    let value = evaluate(&arena, root)?;

    Ok(value)
}
