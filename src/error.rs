/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code. Parse errors cover malformed literals, unbalanced delimiters,
/// unexpected tokens, and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while resolving types and
/// evaluating programs, such as unknown variables, missing operator
/// implementations, and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
