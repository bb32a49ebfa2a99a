//! # fog
//!
//! fog is a tree-walking interpreter for a small, expression-oriented
//! programming language with typed `let`/`const` bindings, anonymous
//! functions, tuples, and first-class runtime type values. Operator
//! behaviour is not baked into the evaluator: applications dispatch through
//! a pluggable table keyed by operator name and operand type identity.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement, expression and type-annotation enums
/// that represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator; nodes carry their source byte offset for
/// error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// type resolution or evaluation, each rendering a human-readable diagnostic
/// that names the offending lexeme, binding or operand types.
pub mod error;
/// Presentation helpers for dumping ASTs and printing bindings.
pub mod fmt;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the scope tree and
/// the value representations to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the data types shared between phases.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Parses a source string into its root block without evaluating it.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails.
///
/// # Examples
/// ```
/// use fog::{ast::Stmt, parse_source};
///
/// let program = parse_source("let x : int := 1 + 2").unwrap();
/// assert!(matches!(program, Stmt::Block(statements) if statements.len() == 1));
/// ```
pub fn parse_source(source: &str) -> Result<Stmt, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Runs a source string through the whole pipeline and returns the
/// interpreter carrying the resulting global bindings.
///
/// This function lexes and parses the provided source, then executes the
/// program's statements against a freshly seeded global scope. The returned
/// interpreter exposes the bindings as the run's observable output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails; the first
/// failure aborts the run.
///
/// # Examples
/// ```
/// use fog::run_source;
///
/// // Simple program: the binding will be computed and no error occurs.
/// let interpreter = run_source("let x : int := 1 + 2").unwrap();
/// let (_, x) = interpreter.bindings().into_iter().find(|(name, _)| name == "x").unwrap();
/// assert_eq!(x.as_int().unwrap(), 3);
///
/// // Example with an intentional error (unknown variable).
/// assert!(run_source("let y : int := x + 1").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Interpreter, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    let interpreter = Interpreter::new();
    interpreter.run(&program)?;

    Ok(interpreter)
}
