use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{primary::parse_primary, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into its root block.
///
/// Statements are consumed until the token stream is exhausted; stray
/// terminators between statements are skipped. The returned block is the
/// program's main block.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, byte offset)` pairs.
///
/// # Returns
/// The root [`Stmt::Block`] holding the top-level statements.
///
/// # Errors
/// Propagates any error from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        if matches!(token, Token::Terminator) {
            tokens.next();
            continue;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(Stmt::Block(statements))
}

/// Maps an infix token to its binding power. Higher binds tighter.
///
/// All powers are left-associative. Tokens outside the table end the
/// expression.
///
/// # Example
/// ```
/// use fog::interpreter::{lexer::Token, parser::core::binding_power};
///
/// assert_eq!(binding_power(&Token::Plus), Some(1));
/// assert_eq!(binding_power(&Token::Star), Some(2));
/// assert_eq!(binding_power(&Token::Terminator), None);
/// ```
#[must_use]
pub const fn binding_power(token: &Token) -> Option<u8> {
    match token {
        Token::Plus | Token::Minus => Some(1),
        Token::Star | Token::Slash => Some(2),
        Token::Lt | Token::Lte | Token::Gt | Token::Gte => Some(3),
        Token::Eq | Token::Neq => Some(4),
        _ => None,
    }
}

/// Parses an expression by precedence climbing.
///
/// The climb starts from a primary and folds infix applications while the
/// next operator binds at least as tightly as `min_bp`. Recursing with
/// `bp + 1` for the right operand makes every level left-associative.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_bp`: The minimum binding power to continue folding; the entry
///   level is `0`.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// Propagates any error from primary or operand parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, min_bp: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lhs = parse_primary(tokens)?;

    while let Some((token, offset)) = tokens.peek() {
        let Some(bp) = binding_power(token) else {
            break;
        };
        if bp < min_bp {
            break;
        }

        let op = token.to_string();
        let offset = *offset;
        tokens.next();

        let rhs = parse_expression(tokens, bp + 1)?;
        lhs = Expr::Binary { op,
                             lhs: Box::new(lhs),
                             rhs: Box::new(rhs),
                             offset };
    }

    Ok(lhs)
}
