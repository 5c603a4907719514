use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, newlines and feeds between tokens.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// The decimal value is accumulated digit by digit as `value * 10 + digit`
/// with wrapping arithmetic: a literal wider than 64 bits silently wraps
/// instead of failing, matching the unchecked accumulation of a classic
/// hand-rolled scanner.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The accumulated (possibly wrapped) integer value.
fn parse_integer(lex: &logos::Lexer<Token>) -> i64 {
    lex.slice()
       .bytes()
       .fold(0_i64, |value, digit| {
           value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
       })
}
