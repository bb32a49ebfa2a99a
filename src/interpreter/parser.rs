/// Core parsing logic for programs and expressions.
///
/// Contains the program entry point and the table-driven precedence climb
/// for infix expressions.
pub mod core;

/// Primary expression parsing.
///
/// Handles literals, variables, calls, prefix minus, parenthesised groups
/// and tuples, and the speculative parse that tells a lambda head from a
/// parenthesised expression list.
pub mod primary;

/// Statement parsing.
///
/// Implements the statement dispatch and the grammar for declarations,
/// assignments, returns and nested blocks.
pub mod statement;

/// Type annotation parsing.
///
/// Implements the algebraic type grammar of sums, products and function
/// arrows used in declarations.
pub mod types;

/// Utility functions for the parser.
///
/// Provides shared helpers for identifiers and comma-separated lists.
pub mod utils;
