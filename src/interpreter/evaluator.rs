/// Core evaluation logic for expressions.
///
/// Holds the interpreter entry points, the expression dispatch, and the
/// environment seeding performed at construction.
pub mod core;

/// Statement evaluation.
///
/// Implements statement dispatch and the control signal that threads early
/// returns out of nested blocks.
pub mod statement;

/// Lambda call evaluation.
///
/// Resolves the callee, binds arguments positionally in a fresh scope
/// chained to the caller, and unwraps returned values.
pub mod call;

/// Default operator installation.
///
/// Populates the global operator table with the integer, float and unary
/// arithmetic the language ships with.
pub mod operators;

/// Type resolution.
///
/// Turns type annotations into runtime type values against a scope.
pub mod types;
