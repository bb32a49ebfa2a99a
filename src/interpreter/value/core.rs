use std::{cell::OnceCell, rc::Rc};

use crate::{
    ast::LambdaDef,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::int_to_float,
};

/// The payload carried by a runtime value.
///
/// `Str` is part of the data model even though the current grammar has no
/// string literals; nothing in the surface language produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The uninitialised sentinel, produced by a typed `let` without an
    /// initializer and by a block body that falls off its end.
    Uninit,
    /// A 32-bit signed integer.
    Int(i32),
    /// A 32-bit float.
    Float(f32),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
    /// A tuple of values.
    Tuple(Vec<Rc<Value>>),
    /// A reference to an uninvoked lambda definition.
    Lambda(Rc<LambdaDef>),
    /// A type description; values with this payload are the runtime types.
    Type(TypeKind),
}

impl Payload {
    /// A short noun for the payload kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Uninit => "an uninitialised value",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Tuple(_) => "a tuple",
            Self::Lambda(_) => "a lambda",
            Self::Type(_) => "a type",
        }
    }
}

/// Describes a runtime type.
///
/// The children of composite kinds are themselves type values, so a type
/// tree is a tree of `Value`s whose payloads are all `Payload::Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A named primitive such as `int`, `float`, `bool`, `lambda` or `type`.
    Primitive(String),
    /// A product (tuple) of component types.
    Product(Vec<Rc<Value>>),
    /// A sum (tagged union) of component types.
    Sum(Vec<Rc<Value>>),
    /// A function type between a domain and a codomain.
    Map {
        /// The argument type.
        domain:   Rc<Value>,
        /// The result type.
        codomain: Rc<Value>,
    },
}

/// Represents a runtime value in the interpreter.
///
/// A value is a payload paired with a reference to its type, which is itself
/// a value whose payload is a [`TypeKind`]. The type slot stays empty only
/// for the untyped uninitialised sentinel; the `type` primitive points at
/// itself.
///
/// Operator dispatch compares types by pointer identity, so all values built
/// from literals share the primitive type singletons installed at
/// global-scope construction.
pub struct Value {
    /// The carried payload.
    pub payload: Payload,
    ty:          OnceCell<Rc<Value>>,
}

/// Shallow by hand: deriving would chase the type slot, and the self-typed
/// `type` primitive makes that chain cyclic.
impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Value")
         .field("payload", &self.payload)
         .field("ty", &self.ty.get().map(std::string::ToString::to_string))
         .finish()
    }
}

impl PartialEq for Value {
    /// Payload equality. The type slot is deliberately not compared, since
    /// the `type` primitive references itself.
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl Value {
    /// Creates a new value with the given payload and type.
    #[must_use]
    pub fn new(payload: Payload, ty: Rc<Self>) -> Rc<Self> {
        let value = Rc::new(Self { payload,
                                   ty: OnceCell::new() });
        let _ = value.ty.set(ty);
        value
    }

    /// Creates the uninitialised sentinel carrying a declared type.
    #[must_use]
    pub fn uninit(ty: Rc<Self>) -> Rc<Self> {
        Self::new(Payload::Uninit, ty)
    }

    /// Creates the uninitialised sentinel with no type at all, the result of
    /// a block body that ends without a `return`.
    #[must_use]
    pub fn untyped_uninit() -> Rc<Self> {
        Rc::new(Self { payload: Payload::Uninit,
                       ty:      OnceCell::new(), })
    }

    /// Creates the self-typed `type` primitive.
    ///
    /// The returned value is its own type. The reference cycle this forms is
    /// intentional: the primitive is a process-lifetime singleton.
    #[must_use]
    pub fn self_typed_type() -> Rc<Self> {
        let value = Rc::new(Self { payload: Payload::Type(TypeKind::Primitive("type".to_string())),
                                   ty:      OnceCell::new(), });
        let _ = value.ty.set(Rc::clone(&value));
        value
    }

    /// The type of this value, if it has one.
    #[must_use]
    pub fn ty(&self) -> Option<&Rc<Self>> {
        self.ty.get()
    }

    /// The type of this value, or an error for the untyped sentinel.
    pub fn type_of(&self) -> EvalResult<&Rc<Self>> {
        self.ty.get().ok_or(RuntimeError::UninitialisedValue)
    }

    /// The payload as a 32-bit integer.
    ///
    /// # Errors
    /// `UninitialisedValue` for the sentinel, `TypeMismatch` otherwise.
    pub fn as_int(&self) -> EvalResult<i32> {
        match &self.payload {
            Payload::Int(value) => Ok(*value),
            Payload::Uninit => Err(RuntimeError::UninitialisedValue),
            other => Err(RuntimeError::TypeMismatch { expected: "int",
                                                      found:    other.kind_name().to_string(), }),
        }
    }

    /// The payload as a 32-bit float.
    ///
    /// # Errors
    /// `UninitialisedValue` for the sentinel, `TypeMismatch` otherwise.
    pub fn as_float(&self) -> EvalResult<f32> {
        match &self.payload {
            Payload::Float(value) => Ok(*value),
            Payload::Uninit => Err(RuntimeError::UninitialisedValue),
            other => Err(RuntimeError::TypeMismatch { expected: "float",
                                                      found:    other.kind_name().to_string(), }),
        }
    }

    /// The payload as a float, widening an integer payload when needed.
    ///
    /// Mixed arithmetic widens each operand through this accessor before
    /// applying the float implementation.
    ///
    /// # Errors
    /// `UninitialisedValue` for the sentinel, `TypeMismatch` for payloads
    /// that are neither `Int` nor `Float`.
    pub fn as_widened_float(&self) -> EvalResult<f32> {
        match &self.payload {
            Payload::Int(value) => Ok(int_to_float(*value)),
            Payload::Float(value) => Ok(*value),
            Payload::Uninit => Err(RuntimeError::UninitialisedValue),
            other => Err(RuntimeError::TypeMismatch { expected: "int or float",
                                                      found:    other.kind_name().to_string(), }),
        }
    }

    /// The payload as a boolean.
    ///
    /// # Errors
    /// `UninitialisedValue` for the sentinel, `TypeMismatch` otherwise.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match &self.payload {
            Payload::Bool(value) => Ok(*value),
            Payload::Uninit => Err(RuntimeError::UninitialisedValue),
            other => Err(RuntimeError::TypeMismatch { expected: "bool",
                                                      found:    other.kind_name().to_string(), }),
        }
    }

    /// The lambda definition behind this value, if it holds one.
    #[must_use]
    pub fn as_lambda(&self) -> Option<&Rc<LambdaDef>> {
        match &self.payload {
            Payload::Lambda(def) => Some(def),
            _ => None,
        }
    }

    /// The type description behind this value, if it is a type.
    #[must_use]
    pub const fn as_type(&self) -> Option<&TypeKind> {
        match &self.payload {
            Payload::Type(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns `true` if the value is the uninitialised sentinel.
    #[must_use]
    pub const fn is_uninit(&self) -> bool {
        matches!(self.payload, Payload::Uninit)
    }

    /// Returns `true` if the value is a type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.payload, Payload::Type(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.payload {
            Payload::Uninit => write!(f, "<uninitialised>"),
            Payload::Int(value) => write!(f, "{value}"),
            Payload::Float(value) => write!(f, "{value}"),
            Payload::Bool(value) => write!(f, "{value}"),
            Payload::Str(value) => write!(f, "{value}"),
            Payload::Tuple(elements) => {
                write!(f, "(")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
            Payload::Lambda(_) => write!(f, "<lambda>"),
            Payload::Type(kind) => write!(f, "{kind}"),
        }
    }
}

/// Renders a component of a composite type, parenthesising anything that is
/// not a plain primitive so the result reads back unambiguously.
fn fmt_component(value: &Value) -> String {
    match value.as_type() {
        Some(TypeKind::Primitive(name)) => name.clone(),
        Some(kind) => format!("({kind})"),
        None => "<non-type>".to_string(),
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(name) => write!(f, "{name}"),
            Self::Product(parts) => {
                let rendered: Vec<String> = parts.iter().map(|p| fmt_component(p)).collect();
                write!(f, "{}", rendered.join(" * "))
            },
            Self::Sum(parts) => {
                let rendered: Vec<String> = parts.iter().map(|p| fmt_component(p)).collect();
                write!(f, "{}", rendered.join(" + "))
            },
            Self::Map { domain, codomain } => {
                write!(f, "{} -> {}", fmt_component(domain), fmt_component(codomain))
            },
        }
    }
}
