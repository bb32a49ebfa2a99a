/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// dispatches operator applications through the scope's operator table, and
/// threads the early-return signal out of nested blocks. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes against a scope chain rooted at the global scope.
/// - Seeds the primitive type singletons and the default operator table.
/// - Reports runtime errors such as unknown variables or missing operators.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with its byte offset. Newlines terminate statements unless the
/// line is syntactically unfinished, so the token stream the parser sees
/// always ends every statement with an explicit terminator.
///
/// # Responsibilities
/// - Converts the input text into tokens with source offsets.
/// - Applies the statement-termination rule and tracks delimiter depth.
/// - Reports lexical errors for malformed literals and unbalanced closers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST for statements, expressions and type annotations.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with source offsets.
/// - Distinguishes lambdas from parenthesised tuples by speculation.
pub mod parser;
/// The scope module holds the runtime environment.
///
/// Scopes form a parent-linked tree carrying name bindings and the operator
/// table keyed by operand type identity.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the value payloads, the runtime type descriptions, and the typed
/// accessors used by operator implementations.
pub mod value;
