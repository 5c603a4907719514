use std::iter::Peekable;

use crate::{
    ast::{AstArena, NodeId, NodeKind},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by every parsing function.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression: addition and subtraction.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level and recursively descends through the precedence
/// hierarchy. `+` and `-` are left-associative, so `10 - 3 - 2` parses as
/// `(10 - 3) - 2`.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `arena`: Arena receiving the allocated nodes.
///
/// # Returns
/// The root of the parsed subtree. The iterator is left positioned at the
/// first token the subtree did not consume.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, arena: &mut AstArena)
                               -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens, arena)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_node_kind(token)
           && matches!(op, NodeKind::Add | NodeKind::Sub)
        {
            tokens.next();
            let right = parse_term(tokens, arena)?;
            left = arena.alloc_node(op, Some(left), Some(right), 0)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `arena`: Arena receiving the allocated nodes.
///
/// # Returns
/// A binary subtree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, arena: &mut AstArena) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens, arena)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_node_kind(token)
           && matches!(op, NodeKind::Mul | NodeKind::Div)
        {
            tokens.next();
            let right = parse_factor(tokens, arena)?;
            left = arena.alloc_node(op, Some(left), Some(right), 0)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: the right operand recurses into this rule
/// again, so `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
///
/// Grammar: `factor := unary ("^" factor)?`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `arena`: Arena receiving the allocated nodes.
///
/// # Returns
/// An exponentiation subtree, or the bare unary operand when no `^`
/// follows.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, arena: &mut AstArena) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_unary(tokens, arena)?;

    if let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let right = parse_factor(tokens, arena)?;
        return arena.alloc_node(NodeKind::Pow, Some(left), Some(right), 0);
    }

    Ok(left)
}

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`, which are right-associative
/// and may be stacked (`--5` parses as `-(-5)`). Unary `-` is desugared
/// into binary subtraction from a fresh zero leaf, `0 - operand`; unary
/// `+` returns the operand unchanged. If no prefix operator is present the
/// function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `arena`: Arena receiving the allocated nodes.
///
/// # Returns
/// The (possibly desugared) operand subtree.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, arena: &mut AstArena) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            let operand = parse_unary(tokens, arena)?;
            let zero = arena.alloc_leaf(NodeKind::IntLiteral, 0)?;
            arena.alloc_node(NodeKind::Sub, Some(zero), Some(operand), 0)
        },
        Some(Token::Plus) => {
            tokens.next();
            parse_unary(tokens, arena)
        },
        _ => parse_primary(tokens, arena),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - integer literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed leaf or grouped subtree.
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] if a `(` group is not closed.
/// - [`ParseError::SyntaxError`] for any other token, or for the end of
///   the input.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, arena: &mut AstArena) -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Integer(value)) => {
            let value = *value;
            tokens.next();
            arena.alloc_leaf(NodeKind::IntLiteral, value)
        },
        Some(Token::LParen) => {
            tokens.next();
            let node = parse_expression(tokens, arena)?;

            match tokens.peek() {
                Some(Token::RParen) => {
                    tokens.next();
                    Ok(node)
                },
                _ => Err(ParseError::ExpectedClosingParen),
            }
        },
        _ => Err(ParseError::SyntaxError),
    }
}

/// Maps a token to the AST node kind of the binary operation it denotes.
///
/// Returns `None` for tokens that are not binary operators (literals and
/// parentheses).
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(NodeKind)` for `+`, `-`, `*`, `/`, `^`; otherwise `None`.
pub fn token_to_node_kind(token: &Token) -> Option<NodeKind> {
    match token {
        Token::Plus => Some(NodeKind::Add),
        Token::Minus => Some(NodeKind::Sub),
        Token::Star => Some(NodeKind::Mul),
        Token::Slash => Some(NodeKind::Div),
        Token::Caret => Some(NodeKind::Pow),
        Token::Integer(_) | Token::LParen | Token::RParen | Token::Ignored => None,
    }
}
