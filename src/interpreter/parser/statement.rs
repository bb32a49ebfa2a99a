use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            types::parse_type,
            utils::parse_identifier,
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is driven by the first token:
/// - a block opener starts a nested block,
/// - `let` or `const` starts a declaration,
/// - an identifier directly followed by `:=` starts an assignment,
/// - `return` starts an explicit return with a trailing expression,
/// - anything else is a parse error naming the offending lexeme.
///
/// Stray terminators are skipped by the enclosing block loop, never here.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, byte offset)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
///
/// # Errors
/// Returns a `ParseError` for an unexpected leading token or any malformed
/// statement body.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBrace, _)) => {
            tokens.next();
            parse_block(tokens)
        },
        Some((Token::Let | Token::Const, _)) => parse_declare(tokens),
        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            let (name, offset) = match lookahead.next() {
                Some((Token::Identifier(name), offset)) => (name.clone(), *offset),
                _ => unreachable!(),
            };
            match lookahead.peek() {
                Some((Token::Assign, _)) => parse_assign(tokens),
                _ => Err(ParseError::UnexpectedToken { token: name, offset }),
            }
        },
        Some((Token::Return, offset)) => {
            let offset = *offset;
            tokens.next();
            let value = parse_expression(tokens, 0)?;
            Ok(Stmt::Return { value, offset })
        },
        Some((token, offset)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   offset: *offset, }),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses the body of a block whose opener has already been consumed.
///
/// Statements are collected until the matching closer, skipping terminators
/// between them. The closer is consumed.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the block opener.
///
/// # Returns
/// A [`Stmt::Block`] containing the parsed statements.
///
/// # Errors
/// Returns a `ParseError` if a statement is malformed or input ends before
/// the closer.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::Terminator, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
        }
    }

    Ok(Stmt::Block(statements))
}

/// Parses a declaration statement.
///
/// A declaration has the form `let NAME : TYPE` or `const NAME : TYPE`,
/// optionally followed by `:= EXPR`. The colon and type annotation are
/// required; the initializer is optional, and a declaration whose type is
/// directly followed by a terminator binds the name uninitialised.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `let` or `const`.
///
/// # Returns
/// A [`Stmt::Declare`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or `:` is missing,
/// - the type annotation is malformed,
/// - the type is followed by something other than `:=` or a terminator.
fn parse_declare<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (is_const, offset) = match tokens.next() {
        Some((Token::Let, offset)) => (false, *offset),
        Some((Token::Const, offset)) => (true, *offset),
        _ => unreachable!(),
    };

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Colon, _)) => {},
        Some((token, offset)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("Expected ':' after '{name}', found '{token}'"),
                                                     offset: *offset, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { offset }),
    }

    let ty = parse_type(tokens)?;

    let init = match tokens.peek() {
        Some((Token::Terminator, _)) | None => None,
        Some((Token::Assign, _)) => {
            tokens.next();
            Some(parse_expression(tokens, 0)?)
        },
        Some((token, offset)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("Expected ':=' after the type of '{name}', found '{token}'"),
                                                     offset: *offset, });
        },
    };

    Ok(Stmt::Declare { is_const,
                       name,
                       ty,
                       init,
                       offset })
}

/// Parses an assignment statement `NAME := EXPR`.
///
/// The caller has already established through lookahead that the next two
/// tokens are an identifier and `:=`.
fn parse_assign<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, offset) = match tokens.next() {
        Some((Token::Identifier(name), offset)) => (name.clone(), *offset),
        _ => unreachable!(),
    };

    match tokens.next() {
        Some((Token::Assign, _)) => {},
        _ => unreachable!(),
    }

    let value = parse_expression(tokens, 0)?;

    Ok(Stmt::Assign { name, value, offset })
}
