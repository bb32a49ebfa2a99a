use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, LambdaBody, LambdaDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_block,
            utils::parse_comma_separated,
        },
    },
    util::num::narrow_int_literal,
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, float and boolean literals
/// - identifiers and calls
/// - prefix minus, applied to another primary
/// - parenthesised groups and tuples
/// - lambda values
///
/// Prefix operators bind tighter than every infix operator, so `-x * y`
/// negates only `x`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`], or a `ParseError` naming the offending
/// lexeme.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Int(value), offset)) => {
            let (value, offset) = (*value, *offset);
            tokens.next();
            Ok(Expr::Int { value: narrow_int_literal(value),
                           offset })
        },
        Some((Token::Float(value), offset)) => {
            let (value, offset) = (*value, *offset);
            tokens.next();
            Ok(Expr::Float { value, offset })
        },
        Some((Token::True, offset)) => {
            let offset = *offset;
            tokens.next();
            Ok(Expr::Bool { value: true,
                            offset })
        },
        Some((Token::False, offset)) => {
            let offset = *offset;
            tokens.next();
            Ok(Expr::Bool { value: false,
                            offset })
        },
        Some((Token::Minus, offset)) => {
            let offset = *offset;
            tokens.next();
            let operand = parse_primary(tokens)?;
            Ok(Expr::Unary { op: "-".to_string(),
                             operand: Box::new(operand),
                             offset })
        },
        Some((Token::Identifier(_), _)) => parse_variable_or_call(tokens),
        Some((Token::LParen, _)) => parse_paren_or_lambda(tokens),
        Some((token, offset)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   offset: *offset, }),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses an identifier, producing a call when it is directly followed by an
/// argument list and a variable reference otherwise.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, offset) = match tokens.next() {
        Some((Token::Identifier(name), offset)) => (name.clone(), *offset),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let args =
                parse_comma_separated(tokens, |t| parse_expression(t, 0), &Token::RParen)?;
            Ok(Expr::Call { name, args, offset })
        },
        _ => Ok(Expr::Var { name, offset }),
    }
}

/// Parses a parenthesised form, which is either a lambda or an expression
/// list.
///
/// After the opening parenthesis the parser speculates on a cloned iterator:
/// if a parameter list `IDENT (, IDENT)*` followed by `)` and `=>` scans
/// cleanly, the form is a lambda and the clone is committed. Otherwise the
/// original position is kept and the form reparses as a parenthesised
/// expression list, where one element is the expression itself, several form
/// a tuple, and zero form the empty tuple.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the lambda body fails to parse,
/// - the expression list is malformed or unclosed.
fn parse_paren_or_lambda<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let offset = match tokens.next() {
        Some((Token::LParen, offset)) => *offset,
        _ => unreachable!(),
    };

    let mut lookahead = tokens.clone();
    if let Some(params) = scan_parameter_list(&mut lookahead) {
        *tokens = lookahead;
        let body = parse_lambda_body(tokens)?;
        return Ok(Expr::Lambda { def: Rc::new(LambdaDef { params, body }),
                                 offset });
    }

    let mut elements = parse_comma_separated(tokens, |t| parse_expression(t, 0), &Token::RParen)?;

    if elements.len() == 1 {
        return Ok(elements.remove(0));
    }

    Ok(Expr::Tuple { elements, offset })
}

/// Attempts to scan a lambda parameter head `IDENT (, IDENT)* ) =>` on a
/// cloned iterator.
///
/// Returns the parameter names on success. Any mismatch aborts the
/// speculation by returning `None`; the caller then reparses from its saved
/// position, so nothing is consumed from the live stream.
fn scan_parameter_list<'a, I>(tokens: &mut Peekable<I>) -> Option<Vec<String>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut params = Vec::new();

    loop {
        match tokens.next() {
            Some((Token::Identifier(name), _)) => params.push(name.clone()),
            _ => return None,
        }
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            _ => return None,
        }
    }

    match tokens.next() {
        Some((Token::FatArrow, _)) => Some(params),
        _ => None,
    }
}

/// Parses a lambda body: a block when the next token opens one, otherwise a
/// single expression.
fn parse_lambda_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<LambdaBody>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LBrace, _)) = tokens.peek() {
        tokens.next();
        return Ok(LambdaBody::Block(parse_block(tokens)?));
    }

    Ok(LambdaBody::Expr(parse_expression(tokens, 0)?))
}
