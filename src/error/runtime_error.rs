#[derive(Debug)]
/// Represents all errors that can occur during type resolution and
/// evaluation.
pub enum RuntimeError {
    /// Tried to read or assign an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A type annotation named something that is not bound in any scope.
    UnknownTypeName {
        /// The name used in the annotation.
        name: String,
    },
    /// A type annotation named a binding whose value is not a type.
    NotAType {
        /// The name of the non-type binding.
        name: String,
    },
    /// No operator implementation is registered for the operand types.
    UnknownOperator {
        /// The operator name.
        name: String,
        /// The left operand type, absent for unary applications.
        lhs:  Option<String>,
        /// The right operand type.
        rhs:  String,
    },
    /// Tried to call a binding that does not hold a lambda.
    NotCallable {
        /// The name of the binding.
        name: String,
    },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        /// The name of the called binding.
        name:     String,
        /// The number of parameters the lambda declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Tried to assign to a name with no binding in any enclosing scope.
    AssignmentToUnbound {
        /// The name of the variable.
        name: String,
    },
    /// An uninitialised value was used where a concrete value was required.
    UninitialisedValue,
    /// A value had an unexpected payload kind.
    TypeMismatch {
        /// The payload kind that was required.
        expected: &'static str,
        /// The payload kind that was found.
        found:    String,
    },
    /// Integer division or remainder with a zero divisor.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Runtime error: Undefined variable '{name}'.")
            },
            Self::UnknownTypeName { name } => {
                write!(f, "Runtime error: Unknown type name '{name}'.")
            },
            Self::NotAType { name } => {
                write!(f, "Runtime error: '{name}' is not a type.")
            },
            Self::UnknownOperator { name, lhs, rhs } => match lhs {
                Some(lhs) => write!(f,
                                    "Runtime error: Undefined operator '{name}' for operand types {lhs} and {rhs}."),
                None => write!(f,
                               "Runtime error: Undefined unary operator '{name}' for operand type {rhs}."),
            },
            Self::NotCallable { name } => {
                write!(f, "Runtime error: '{name}' is not callable.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found, } => write!(f,
                                                     "Runtime error: '{name}' expects {expected} argument(s), but {found} were supplied."),
            Self::AssignmentToUnbound { name } => {
                write!(f, "Runtime error: Assignment to unbound name '{name}'.")
            },
            Self::UninitialisedValue => {
                write!(f, "Runtime error: Evaluation of an uninitialised value.")
            },
            Self::TypeMismatch { expected, found } => {
                write!(f, "Runtime error: Expected {expected}, found {found}.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
