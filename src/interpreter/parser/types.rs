use std::iter::Peekable;

use crate::{
    ast::TypeExpr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a type annotation.
///
/// The grammar layers function arrows over products over sums:
///
/// ```text
///     type    := product ("->" type)?
///     product := sum ("*" sum)*
///     sum     := primary ("+" primary)*
///     primary := IDENT | "(" type ")"
/// ```
///
/// `->` is right-associative, so `int -> int -> int` reads as
/// `int -> (int -> int)`. A single-element product or sum collapses to its
/// element.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a type.
///
/// # Returns
/// The parsed [`TypeExpr`].
///
/// # Errors
/// Returns a `ParseError` for a missing type name or an unclosed
/// parenthesised type.
pub fn parse_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let domain = parse_product_type(tokens)?;

    if let Some((Token::Arrow, _)) = tokens.peek() {
        tokens.next();
        let codomain = parse_type(tokens)?;
        return Ok(TypeExpr::Map { domain:   Box::new(domain),
                                  codomain: Box::new(codomain), });
    }

    Ok(domain)
}

/// Parses a product type `sum ("*" sum)*`.
fn parse_product_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut parts = vec![parse_sum_type(tokens)?];

    while let Some((Token::Star, _)) = tokens.peek() {
        tokens.next();
        parts.push(parse_sum_type(tokens)?);
    }

    if parts.len() == 1 {
        return Ok(parts.remove(0));
    }

    Ok(TypeExpr::Product(parts))
}

/// Parses a sum type `primary ("+" primary)*`.
fn parse_sum_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut parts = vec![parse_type_primary(tokens)?];

    while let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        parts.push(parse_type_primary(tokens)?);
    }

    if parts.len() == 1 {
        return Ok(parts.remove(0));
    }

    Ok(TypeExpr::Sum(parts))
}

/// Parses a type primary: a name or a parenthesised type.
fn parse_type_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), offset)) => Ok(TypeExpr::Atomic { name:   name.clone(),
                                                                         offset: *offset, }),
        Some((Token::LParen, offset)) => {
            let inner = parse_type(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(inner),
                _ => Err(ParseError::ExpectedClosingParen { offset: *offset }),
            }
        },
        Some((token, offset)) => {
            Err(ParseError::UnexpectedToken { token:  format!("Expected a type, found '{token}'"),
                                              offset: *offset, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}
